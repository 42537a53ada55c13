//! 交互式输入
//!
//! 输入输出流由调用方注入，测试时可用内存 buffer 替代终端。

use crate::constants::{SAVE_HINT, SAVE_PROMPT, URL_PROMPT};
use crate::error::{BrowsirError, Result};
use crate::store::ShortcutSink;
use colored::Colorize;
use std::io::{BufRead, Write};

/// yes/no 提问的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerState {
    /// 等待回答（无法识别的输入会回到这里）
    Awaiting,
    Yes,
    No,
}

impl AnswerState {
    /// 根据一行输入推进状态
    pub fn next(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => AnswerState::Yes,
            "n" | "no" => AnswerState::No,
            _ => AnswerState::Awaiting,
        }
    }
}

/// 基于注入流的提问器
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// 读一行；输入已关闭时返回 `InputClosed`
    fn read_raw_line(&mut self) -> Result<String> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| BrowsirError::io("failed to read input", e))?;
        if read == 0 {
            return Err(BrowsirError::InputClosed);
        }
        Ok(line)
    }

    fn write_prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)
            .and_then(|_| self.output.flush())
            .map_err(|e| BrowsirError::io("failed to write prompt", e))
    }

    /// 反复提问直到得到 y/yes 或 n/no
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        loop {
            self.write_prompt(&format!("{} (y/n): ", question))?;
            match AnswerState::next(&self.read_raw_line()?) {
                AnswerState::Yes => return Ok(true),
                AnswerState::No => return Ok(false),
                AnswerState::Awaiting => continue,
            }
        }
    }

    /// 提示后读取一行自由文本（去掉首尾空白）
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.write_prompt(prompt)?;
        Ok(self.read_raw_line()?.trim().to_string())
    }

    pub fn println(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text).map_err(|e| BrowsirError::io("failed to write output", e))
    }
}

/// 保存流程的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { key: String, url: String },
    Declined,
}

/// 询问是否把未知 token 保存为本地 shortcut
///
/// 保存成功后流程结束，不会继续打开浏览器。
pub fn run_save_flow<R: BufRead, W: Write>(
    token: &str,
    prompter: &mut Prompter<R, W>,
    sink: &mut dyn ShortcutSink,
) -> Result<SaveOutcome> {
    if !prompter.confirm(SAVE_PROMPT)? {
        prompter.println(&SAVE_HINT.green().to_string())?;
        return Ok(SaveOutcome::Declined);
    }

    let url = prompter.read_line(URL_PROMPT)?;
    if url.is_empty() {
        prompter.println(&SAVE_HINT.green().to_string())?;
        return Ok(SaveOutcome::Declined);
    }

    sink.save_shortcut(token, &url)?;
    prompter.println(&format!("Shortcut saved: {} -> {}", token, url).green().to_string())?;
    Ok(SaveOutcome::Saved {
        key: token.to_string(),
        url,
    })
}
