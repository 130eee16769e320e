/// Question box and the last reply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatState {
    pub input: String,
    pub reply: Option<String>,
}
