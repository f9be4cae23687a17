//! Terminal default handler.

/// Answers every request that no resolver matched.
///
/// Always handles the request, so a chain ending here gives every request a
/// response.
pub async fn hello_handler() -> &'static str {
    "Hello, world!\n"
}
