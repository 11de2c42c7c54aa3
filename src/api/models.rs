use crate::models::Message;
use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct RequestBody {
    pub model: String,
    pub messages: Vec<Message>,
}
