//! Shared limits used by the middleware stack and upload handlers.

/// Default maximum request body size: 4MB.
///
/// Applied by the security middleware to all incoming requests so that
/// oversized payloads are rejected before they reach a handler.
pub const DEFAULT_MAX_BODY_SIZE: usize = 4 * 1024 * 1024;

/// Maximum body size for file uploads: 12MB.
///
/// Knowledgebase document uploads are multipart requests that exceed the
/// default body limit, so upload routes use this higher ceiling instead.
pub const DEFAULT_MAX_FILE_BODY_SIZE: usize = 12 * 1024 * 1024;
