//! Reader for plain salary strings, one per line.
//!
//! Every line, including blank ones, becomes an [`Offer`]: a blank line is a
//! posting without a salary, not a gap in the batch.

use std::io::BufRead;

use crate::{FeedError, FeedSource, Offer};

/// Newline-delimited salary strings from any [`BufRead`] source.
pub struct LineFeed<R> {
    source: R,
}

impl<R: BufRead> LineFeed<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }
}

impl<R: BufRead> FeedSource for LineFeed<R> {
    fn offers(self) -> Result<Vec<Offer>, FeedError> {
        let mut offers = Vec::new();
        for line in self.source.lines() {
            let line = line?;
            offers.push(Offer::from_salary(line.trim_end_matches('\r')));
        }
        tracing::debug!(offers = offers.len(), "feed: read salary lines");
        Ok(offers)
    }
}
