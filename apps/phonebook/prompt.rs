use std::borrow::Cow;
use reedline::{
    Prompt,
    PromptEditMode,
    PromptHistorySearch,
    PromptHistorySearchStatus,
};

/// One question asked at the console, with the open data file on the right.
pub(crate) struct QuestionPrompt<'a> {
    question: &'a str,
    data_file: &'a str,
}

impl<'a> QuestionPrompt<'a> {
    pub(crate) fn new(question: &'a str, data_file: &'a str) -> Self {
        Self { question, data_file }
    }
}

impl Prompt for QuestionPrompt<'_> {
    fn render_prompt_left(&self) -> Cow<str> {
        Cow::Borrowed(self.question)
    }

    fn render_prompt_right(&self) -> Cow<str> {
        if self.data_file.is_empty() {
            return Cow::Borrowed("");
        }
        Cow::Owned(format!("[{}]", self.data_file))
    }

    fn render_prompt_indicator(&self, _: PromptEditMode) -> Cow<str> {
        Cow::Borrowed(": ")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        Cow::Borrowed("  > ")
    }

    fn render_prompt_history_search_indicator(&self, search: PromptHistorySearch) -> Cow<str> {
        let status = match search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "no match ",
        };
        Cow::Owned(format!("({}search: {}) ", status, search.term))
    }
}
