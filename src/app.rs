use crate::message::Message;
use crate::models::MergeControl;
use crate::ui;
use crate::update::handle_message;
use iced::{Element, Task};
use std::path::PathBuf;

pub struct PdfStackApp {
    pub files: Vec<PathBuf>,
    pub merge_control: MergeControl,
    pub split_prefix: String,
    pub output_path: Option<PathBuf>,
    pub status_message: Option<String>,
}

impl Default for PdfStackApp {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            merge_control: MergeControl::Idle,
            split_prefix: String::new(),
            output_path: None,
            status_message: None,
        }
    }
}

impl PdfStackApp {
    pub fn move_entry_up(&mut self, idx: usize) {
        if idx > 0 && idx < self.files.len() {
            self.files.swap(idx - 1, idx);
        }
    }

    pub fn move_entry_down(&mut self, idx: usize) {
        if idx + 1 < self.files.len() {
            self.files.swap(idx, idx + 1);
        }
    }

    pub fn remove_entry(&mut self, idx: usize) {
        if idx < self.files.len() {
            self.files.remove(idx);
        }
        if self.files.is_empty() {
            self.reset_merge_control();
        }
    }

    /// Back to the initial state: the merge button picks files again and
    /// the "open result" action is disabled until the next merge.
    pub fn reset_merge_control(&mut self) {
        self.merge_control = MergeControl::Idle;
        self.output_path = None;
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        handle_message(self, message)
    }

    pub fn view(&self) -> Element<Message> {
        ui::view(self)
    }
}
