//! Cross-cutting pieces shared by the server crate and the binary:
//! tracing setup and small response types.

pub mod types;

pub mod utils {
    pub mod logging;
}
