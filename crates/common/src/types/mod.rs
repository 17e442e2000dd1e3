use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// JSON body returned alongside 5xx responses.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}
