/// Amount as written in the file, with its parsed value for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Amount {
    pub text: String,
    pub value: f64,
}

/// One transaction as seen by the review loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub amount: Option<Amount>,
    pub payee: String,
}
