use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Error { 
    #[display("index type `{index_type}` has no total order.")]
    Unordered { index_type: String },

    #[display("zero has no leading or trailing term.")]
    Zero,

    #[display("{index} is not in {index_set}.")]
    InvalidIndex { index: String, index_set: String },
}

impl std::error::Error for Error {}
