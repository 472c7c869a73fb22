/// Structural misuse of an identifier tree.
///
/// Only definition requests with an incompatible descriptor and
/// extension-prevention requests fail; every other tree operation
/// normalizes silently.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TestIdError {
    #[error("cannot define accessor member '{name}' on a test id")]
    AccessorDescriptor { name: String },

    #[error("cannot define non-configurable member '{name}' on a test id")]
    NotConfigurable { name: String },

    #[error("cannot define non-writable member '{name}' on a test id")]
    NotWritable { name: String },

    #[error("test id cannot be made non-extensible")]
    NotExtensible,
}
