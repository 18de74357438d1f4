#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod classifier;
pub mod error;
pub mod keys;
pub mod registry;

pub use classifier::{Classification, ClassificationSource, NetworkClassifier};
pub use error::{BoxError, Error, ErrorKind};
pub use keys::{
    CUSTOM_KEY_PREFIX, NetworkType, STANDARD_KEY_PREFIX, generate_key, is_custom_key,
    is_standard_key, network_type_from_key, sanitize_name,
};
pub use registry::{ChainInfo, NativeCurrency, RegistryClient, RetryPolicy, RpcEndpoint};
