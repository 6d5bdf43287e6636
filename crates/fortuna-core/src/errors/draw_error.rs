/// A weight vector that cannot produce a valid draw.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DrawError {
    #[error("cannot draw from an empty catalog")]
    EmptyCatalog,

    #[error("weight vector has {weights} entries but the catalog has {catalog}")]
    LengthMismatch { weights: usize, catalog: usize },

    #[error("weight at index {index} is negative: {weight}")]
    NegativeWeight { index: usize, weight: f64 },

    #[error("weight at index {index} is not finite: {weight}")]
    NonFiniteWeight { index: usize, weight: f64 },

    #[error("weights sum to zero, no item can be drawn")]
    ZeroTotal,

    #[error("weights sum is not finite: {total}")]
    TotalOverflow { total: f64 },
}
