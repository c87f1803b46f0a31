//! nabory-feeds: feed readers for nabory.
//!
//! Each reader turns an already-downloaded source into [`Offer`] values whose
//! raw `salary` text is handed to the normaliser unchanged. Fetching the feed
//! over the network is left to the caller.

pub mod lines;
pub mod xml;

use thiserror::Error;

/// One vacancy posting, with the fields the normalisers and report use.
///
/// Text fields are trimmed; fields missing from the source are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Offer {
    /// `stanowisko`
    pub position: String,
    /// `do_spraw`, the area the position handles.
    pub duties: String,
    /// `nazwa_firmy`
    pub employer: String,
    /// `komorka_organizacyjna`
    pub unit: String,
    /// `miejsce_wykonywania_pracy`
    pub location: String,
    /// `wymiaretatu`, raw.
    pub workload: String,
    /// `liczba_stanowisk_pracy`; 1 when absent.
    pub vacancies: u32,
    /// `wynagrodzenie`, raw.
    pub salary: String,
    pub url: String,
    /// `data_wprowadzenia`, as published.
    pub published: String,
}

impl Offer {
    /// An offer carrying only a salary string.
    pub fn from_salary(salary: impl Into<String>) -> Self {
        Self {
            salary: salary.into(),
            vacancies: 1,
            ..Self::default()
        }
    }
}

/// Errors raised while reading a feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("XML parse error at byte {position}: {message}")]
    Xml { position: u64, message: String },
    #[error("invalid vacancy count {0:?}")]
    Vacancies(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Trait implemented by each feed source.
pub trait FeedSource {
    /// Read every offer, in source order.
    fn offers(self) -> Result<Vec<Offer>, FeedError>;
}
