//! Request and response payloads for the Bolna REST API.
//!
//! Provider payloads are only partially stable, so these types follow one
//! rule: fields the platform reads are typed, everything else is captured
//! by a flattened map and relayed verbatim.

mod agent;
mod batch;
mod catalog;
mod execution;
mod knowledgebase;
mod phone;
mod subaccount;

pub use agent::{BolnaAgent, CreatedAgent};
pub use batch::{BatchFile, BolnaBatch};
pub use catalog::{Model, Voice};
pub use execution::{AgentExecution, ExecutionFilters, ExecutionPage, TelephonyData};
pub use knowledgebase::{Knowledgebase, KnowledgebaseFile};
pub use phone::BolnaPhoneNumber;
pub use subaccount::CreatedSubaccount;
