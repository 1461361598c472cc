//! In-memory fixtures for service tests

use std::io;
use std::sync::{Arc, Mutex};

use bookworm_common::JwtService;
use bookworm_core::{Actor, Book, Chapter, Snowflake, User};
use bookworm_db::InMemoryStore;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

use super::context::ServiceContext;

pub(crate) fn context() -> ServiceContext {
    context_with_reader(None)
}

pub(crate) fn context_with_reader(base: Option<&str>) -> ServiceContext {
    ServiceContext::builder()
        .in_memory(Arc::new(InMemoryStore::new()))
        .jwt_service(Arc::new(JwtService::new("test-secret", 60)))
        .external_reader_base(base.map(str::to_string))
        .build()
        .unwrap()
}

pub(crate) async fn seed_user(ctx: &ServiceContext, username: &str) -> Actor {
    let user = User::new(ctx.generate_id(), username.to_string());
    ctx.user_repo().create(&user).await.unwrap();
    Actor::new(user.id)
}

pub(crate) async fn seed_book(ctx: &ServiceContext, author: Actor, title: &str) -> Book {
    let book = Book::new(
        ctx.generate_id(),
        author.user_id,
        title.to_string(),
        format!("{title} synopsis"),
        None,
    );
    ctx.book_repo().create(&book).await.unwrap();
    book
}

pub(crate) async fn seed_chapter(
    ctx: &ServiceContext,
    book_id: Snowflake,
    id: Snowflake,
    title: &str,
) -> Chapter {
    let chapter = Chapter::new(id, book_id, title.to_string(), format!("{title} body"));
    ctx.chapter_repo().create(&chapter).await.unwrap();
    chapter
}

/// Formatted log output captured from the current thread
#[derive(Clone, Default)]
pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Route this thread's `tracing` events into a fresh buffer
    pub(crate) fn install() -> (Self, DefaultGuard) {
        let logs = Self::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (logs, guard)
    }

    pub(crate) fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
