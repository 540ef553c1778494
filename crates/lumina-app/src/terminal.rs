//! Interactive terminal front end for the chat shell.

use std::fmt::Display;
use std::io::Write;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinSet;

use lumina_chat::ChatShell;
use lumina_core::{Locale, SiteState};

/// Line-oriented output shared between the input loop and reply tasks.
#[derive(Clone)]
pub struct Console {
    out: Arc<Mutex<dyn Write + Send>>,
}

impl Console {
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Arc::new(Mutex::new(out)),
        }
    }

    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    pub fn line(&self, text: impl Display) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
            tracing::debug!(error = %e, "Console write failed");
        }
    }
}

/// Run the chat widget over `input` until `/quit` or end of input.
///
/// Returns once every submitted reply has been printed.
pub async fn run_chat<R>(
    shell: ChatShell,
    site: &mut SiteState,
    input: R,
    console: Console,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    print_help(&console, &site.locale());
    open(&shell, &console, &site.locale());

    let mut replies = JoinSet::new();
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "/quit" | "/exit" => break,
            "/open" => open(&shell, &console, &site.locale()),
            "/close" => {
                shell.close();
                console.line("-- closed --");
            }
            "/lang" => {
                let language = site.toggle_language();
                console.line(format_args!("-- {} --", language.display_name()));
            }
            "/help" => print_help(&console, &site.locale()),
            _ if !shell.is_open() => console.line("-- closed, type /open --"),
            _ => {
                let locale = site.locale();
                shell.set_input(line.clone());
                let Some(handle) = shell.spawn_submit(&locale) else {
                    continue;
                };
                console.line(format_args!("   {}", locale.content.chat.thinking));
                let console = console.clone();
                replies.spawn(async move {
                    match handle.await {
                        Ok(reply) => console.line(format_args!("<  {}", reply.text())),
                        Err(e) => tracing::error!(error = %e, "Reply task failed"),
                    }
                });
            }
        }
    }

    while let Some(result) = replies.join_next().await {
        if let Err(e) = result {
            tracing::error!(error = %e, "Reply printer failed");
        }
    }
    tracing::info!(messages = shell.transcript().len(), "Chat session ended");
    Ok(())
}

fn open(shell: &ChatShell, console: &Console, locale: &Locale) {
    let before = shell.transcript().len();
    shell.open(locale);
    console.line(format_args!("== {} ==", locale.content.chat.title));
    let transcript = shell.transcript();
    for message in transcript.iter().skip(before) {
        console.line(format_args!("<  {}", message.text()));
    }
}

fn print_help(console: &Console, locale: &Locale) {
    console.line(format_args!(
        "[{}] {}  (/open /close /lang /help /quit)",
        locale.language, locale.content.chat.placeholder
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use lumina_chat::{FallbackClassifier, LocalFallbackResponder};
    use lumina_core::{Language, SubmitPolicy};
    use tokio::io::BufReader;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn shell(delay_ms: u64) -> ChatShell {
        ChatShell::new(
            Arc::new(LocalFallbackResponder::new(
                FallbackClassifier::default(),
                Duration::from_millis(delay_ms),
            )),
            SubmitPolicy::Serialized,
        )
    }

    async fn run(shell: &ChatShell, language: Language, input: &'static str) -> String {
        let buf = SharedBuf::default();
        let mut site = SiteState::new(language);
        run_chat(
            shell.clone(),
            &mut site,
            BufReader::new(input.as_bytes()),
            Console::new(buf.clone()),
        )
        .await
        .unwrap();
        buf.contents()
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_reply_printed_after_input_ends() {
        let shell = shell(1500);
        let out = run(&shell, Language::En, "what stack\n").await;

        assert!(out.contains("<  For the frontend, I rely on React"));
        assert!(!shell.is_typing());
        assert_eq!(shell.transcript().len(), 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_every_reply_printed_without_delay() {
        for _ in 0..20 {
            let shell = shell(0);
            let out = run(&shell, Language::En, "what stack\nemail\n").await;
            // Welcome plus one line per reply.
            assert_eq!(out.matches("\n<  ").count(), 3, "output was:\n{}", out);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_still_flushes_replies() {
        let shell = shell(500);
        let out = run(&shell, Language::Es, "proceso\n/quit\nignored\n").await;

        assert!(out.contains("<  Abogo por Domain-Driven Design"));
        assert!(!out.contains("ignored"));
    }

    #[tokio::test]
    async fn test_closed_widget_rejects_lines() {
        let shell = shell(0);
        let out = run(&shell, Language::En, "/close\nstack\n/open\n").await;

        assert!(out.contains("-- closed, type /open --"));
        // Welcome once, no reply.
        assert_eq!(shell.transcript().len(), 1);
        assert_eq!(out.matches("== ").count(), 2);
    }

    #[tokio::test]
    async fn test_lang_toggle_switches_reply_language() {
        let shell = shell(0);
        let out = run(&shell, Language::En, "/lang\nstack\n").await;

        assert!(out.contains("-- Español --"));
        assert!(out.contains("<  Para el frontend"));
    }
}
