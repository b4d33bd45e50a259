use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("audit hash must be 32 bytes, got {0}")]
    InvalidHashLength(usize),

    #[error("security score {0} is out of range (0-100)")]
    ScoreOutOfRange(u32),

    #[error("{field} = {value} does not fit in {max}")]
    CountOutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },

    #[error("program name of {0} bytes does not fit a u32 length prefix")]
    ProgramNameTooLong(usize),

    #[error("failed to serialize audit result: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no off-curve address found for audit record seeds")]
    AddressDerivation,

    #[error("invalid public key: {0}")]
    InvalidPubkey(String),

    #[error("unknown cluster: {0}")]
    InvalidCluster(String),

    #[error("account source error: {0}")]
    AccountSource(String),
}
