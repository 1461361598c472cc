//! In-memory store for tests and ephemeral runs.
//!
//! [`InMemoryStore`] keeps every table in a `BTreeMap` keyed by ID behind a
//! single `RwLock`, so iteration order is ID order and each repository call
//! is atomic with respect to the others. Data is lost when the store is
//! dropped.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;

use bookworm_core::{
    Book, BookRepository, Chapter, ChapterRepository, Comment, CommentRepository, CommentVote,
    CommentWithAuthor, DomainError, Reaction, ReactionRepository, Reactor, RepoResult, Snowflake,
    Target, User, UserRepository,
};

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<Snowflake, User>,
    books: BTreeMap<Snowflake, Book>,
    chapters: BTreeMap<Snowflake, Chapter>,
    comments: BTreeMap<Snowflake, Comment>,
    reactions: BTreeMap<Snowflake, Reaction>,
}

impl Tables {
    fn username(&self, id: Snowflake) -> RepoResult<String> {
        self.users
            .get(&id)
            .map(|u| u.username.clone())
            .ok_or(DomainError::UserNotFound(id))
    }
}

/// Lock-protected implementation of every repository trait
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RepoResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|e| DomainError::InternalError(format!("lock poisoned: {e}")))
    }

    fn write(&self) -> RepoResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|e| DomainError::InternalError(format!("lock poisoned: {e}")))
    }

    fn insert_unique<T: Clone>(
        map: &mut BTreeMap<Snowflake, T>,
        id: Snowflake,
        row: &T,
    ) -> RepoResult<()> {
        if map.contains_key(&id) {
            return Err(DomainError::DatabaseError(format!("duplicate key {id}")));
        }
        map.insert(id, row.clone());
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    async fn create(&self, user: &User) -> RepoResult<()> {
        let mut tables = self.write()?;
        if tables.users.values().any(|u| u.username == user.username) {
            return Err(DomainError::ValidationError(format!(
                "username '{}' is taken",
                user.username
            )));
        }
        Self::insert_unique(&mut tables.users, user.id, user)
    }
}

#[async_trait]
impl BookRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Book>> {
        Ok(self.read()?.books.get(&id).cloned())
    }

    async fn list(&self, title_contains: Option<&str>) -> RepoResult<Vec<Book>> {
        let needle = title_contains.map(str::to_lowercase);
        Ok(self
            .read()?
            .books
            .values()
            .filter(|b| {
                needle
                    .as_deref()
                    .map_or(true, |n| b.title.to_lowercase().contains(n))
            })
            .cloned()
            .collect())
    }

    async fn find_by_author(&self, author_id: Snowflake) -> RepoResult<Vec<Book>> {
        Ok(self
            .read()?
            .books
            .values()
            .filter(|b| b.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn create(&self, book: &Book) -> RepoResult<()> {
        let mut tables = self.write()?;
        if !tables.users.contains_key(&book.author_id) {
            return Err(DomainError::UserNotFound(book.author_id));
        }
        Self::insert_unique(&mut tables.books, book.id, book)
    }
}

#[async_trait]
impl ChapterRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Chapter>> {
        Ok(self.read()?.chapters.get(&id).cloned())
    }

    async fn find_by_book(&self, book_id: Snowflake) -> RepoResult<Vec<Chapter>> {
        Ok(self
            .read()?
            .chapters
            .values()
            .filter(|c| c.book_id == book_id)
            .cloned()
            .collect())
    }

    async fn find_previous(
        &self,
        book_id: Snowflake,
        chapter_id: Snowflake,
    ) -> RepoResult<Option<Chapter>> {
        Ok(self
            .read()?
            .chapters
            .range(..chapter_id)
            .rev()
            .map(|(_, c)| c)
            .find(|c| c.book_id == book_id)
            .cloned())
    }

    async fn find_next(
        &self,
        book_id: Snowflake,
        chapter_id: Snowflake,
    ) -> RepoResult<Option<Chapter>> {
        let tables = self.read()?;
        let next = tables
            .chapters
            .range(chapter_id..)
            .map(|(_, c)| c)
            .find(|c| c.book_id == book_id && c.id > chapter_id)
            .cloned();
        Ok(next)
    }

    async fn create(&self, chapter: &Chapter) -> RepoResult<()> {
        let mut tables = self.write()?;
        if !tables.books.contains_key(&chapter.book_id) {
            return Err(DomainError::BookNotFound(chapter.book_id));
        }
        Self::insert_unique(&mut tables.chapters, chapter.id, chapter)
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        Ok(self.read()?.comments.get(&id).cloned())
    }

    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        let mut tables = self.write()?;
        tables.username(comment.author_id)?;
        Self::insert_unique(&mut tables.comments, comment.id, comment)
    }

    async fn find_thread(&self, target: Target) -> RepoResult<Vec<CommentWithAuthor>> {
        let tables = self.read()?;
        tables
            .comments
            .values()
            .filter(|c| c.target == target)
            .map(|c| -> RepoResult<CommentWithAuthor> {
                Ok(CommentWithAuthor {
                    comment: c.clone(),
                    author_username: tables.username(c.author_id)?,
                })
            })
            .collect()
    }

    async fn increment(&self, id: Snowflake, vote: CommentVote) -> RepoResult<Option<Comment>> {
        let mut tables = self.write()?;
        Ok(tables.comments.get_mut(&id).map(|comment| {
            comment.apply_vote(vote);
            comment.clone()
        }))
    }
}

#[async_trait]
impl ReactionRepository for InMemoryStore {
    async fn upsert(&self, reaction: &Reaction) -> RepoResult<Reaction> {
        let mut tables = self.write()?;
        tables.username(reaction.user_id)?;

        let existing = tables
            .reactions
            .values_mut()
            .find(|r| r.user_id == reaction.user_id && r.target == reaction.target);

        if let Some(row) = existing {
            row.kind = reaction.kind;
            row.updated_at = Utc::now();
            return Ok(row.clone());
        }

        Self::insert_unique(&mut tables.reactions, reaction.id, reaction)?;
        Ok(reaction.clone())
    }

    async fn find_reactors(&self, target: Target) -> RepoResult<Vec<Reactor>> {
        let tables = self.read()?;
        tables
            .reactions
            .values()
            .filter(|r| r.target == target)
            .map(|r| -> RepoResult<Reactor> {
                Ok(Reactor {
                    user_id: r.user_id,
                    username: tables.username(r.user_id)?,
                    kind: r.kind,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookworm_core::{ReactionKind, SnowflakeGenerator};

    struct Fixture {
        store: InMemoryStore,
        ids: SnowflakeGenerator,
        author: User,
        book: Book,
    }

    async fn fixture() -> Fixture {
        let store = InMemoryStore::new();
        let ids = SnowflakeGenerator::new(1);
        let author = User::new(ids.generate(), "author".to_string());
        UserRepository::create(&store, &author).await.unwrap();
        let book = Book::new(
            ids.generate(),
            author.id,
            "The Long Road".to_string(),
            "A journey".to_string(),
            None,
        );
        BookRepository::create(&store, &book).await.unwrap();
        Fixture {
            store,
            ids,
            author,
            book,
        }
    }

    #[tokio::test]
    async fn test_upsert_keeps_one_row_per_pair() {
        let f = fixture().await;
        let target = Target::book(f.book.id);

        let first = f
            .store
            .upsert(&Reaction::new(f.ids.generate(), f.author.id, target, ReactionKind::Like))
            .await
            .unwrap();
        let second = f
            .store
            .upsert(&Reaction::new(f.ids.generate(), f.author.id, target, ReactionKind::Dislike))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.kind, ReactionKind::Dislike);

        let reactors = f.store.find_reactors(target).await.unwrap();
        assert_eq!(reactors.len(), 1);
        assert_eq!(reactors[0].kind, ReactionKind::Dislike);
        assert_eq!(reactors[0].username, "author");
    }

    #[tokio::test]
    async fn test_chapter_neighbours_stay_within_book() {
        let f = fixture().await;
        let other = Book::new(f.ids.generate(), f.author.id, "Other".into(), "x".into(), None);
        BookRepository::create(&f.store, &other).await.unwrap();

        let mut mine = Vec::new();
        for i in 0..3 {
            let own = Chapter::new(f.ids.generate(), f.book.id, format!("ch{i}"), "text".into());
            ChapterRepository::create(&f.store, &own).await.unwrap();
            let foreign = Chapter::new(f.ids.generate(), other.id, "x".into(), "x".into());
            ChapterRepository::create(&f.store, &foreign).await.unwrap();
            mine.push(own.id);
        }

        let prev = f.store.find_previous(f.book.id, mine[1]).await.unwrap();
        let next = f.store.find_next(f.book.id, mine[1]).await.unwrap();
        assert_eq!(prev.map(|c| c.id), Some(mine[0]));
        assert_eq!(next.map(|c| c.id), Some(mine[2]));

        assert!(f.store.find_previous(f.book.id, mine[0]).await.unwrap().is_none());
        assert!(f.store.find_next(f.book.id, mine[2]).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_increment_unknown_comment() {
        let f = fixture().await;
        let result = f
            .store
            .increment(Snowflake::new(404), CommentVote::Like)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_list_filters_case_insensitively() {
        let f = fixture().await;
        assert_eq!(f.store.list(Some("long")).await.unwrap().len(), 1);
        assert_eq!(f.store.list(Some("LONG ROAD")).await.unwrap().len(), 1);
        assert!(f.store.list(Some("short")).await.unwrap().is_empty());
        assert_eq!(f.store.list(None).await.unwrap().len(), 1);
    }
}
