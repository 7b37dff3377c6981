//! Resets the `movies` table to a freshly randomised state.

use sea_orm::{EntityTrait, TransactionTrait};

use crate::{
    entities::movie,
    error::AppResult,
    titles::{TITLE_WORDS, TitleSource, title_case},
};

pub const MOVIE_COUNT: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedReport {
    pub deleted: u64,
    pub inserted: usize,
}

/// Deletes every movie and inserts [`MOVIE_COUNT`] new ones in a single transaction.
///
/// Nothing is retried; on error the transaction is rolled back when dropped.
pub async fn make_movies<C, T>(db: &C, titles: &mut T) -> AppResult<SeedReport>
where
    C: TransactionTrait,
    T: TitleSource + ?Sized,
{
    let txn = db.begin().await?;

    let deleted = movie::Entity::delete_many().exec(&txn).await?.rows_affected;
    tracing::debug!(deleted, "cleared movies");

    let movies: Vec<movie::ActiveModel> = (0..MOVIE_COUNT)
        .map(|_| movie::ActiveModel::with_title(title_case(&titles.sentence(TITLE_WORDS))))
        .collect();
    let inserted = movies.len();

    movie::Entity::insert_many(movies).exec(&txn).await?;
    txn.commit().await?;

    tracing::info!(deleted, inserted, "seeded movies");
    Ok(SeedReport { deleted, inserted })
}
