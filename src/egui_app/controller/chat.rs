use super::*;
use crate::finetune::chat;

impl EguiController {
    /// Answer the question currently in the chat box.
    pub fn send_chat(&mut self) {
        let reply = chat::respond(&self.ui.chat.input);
        self.ui.chat.reply = Some(reply.to_string());
    }
}
