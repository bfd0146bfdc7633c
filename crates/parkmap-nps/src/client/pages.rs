//! Multi-page listing fetches for `NpsClient`.

use std::pin::pin;

use futures::stream::{self, Stream, TryStreamExt};

use crate::error::NpsError;
use crate::pagination::{request_count, PageOffsets};
use crate::types::{RawPage, RawRecord};

use super::NpsClient;

enum Cursor {
    First,
    Following(PageOffsets),
}

impl NpsClient {
    /// Lazily fetches every page of `resource`, one request at a time.
    ///
    /// The first page is requested with `start=0`; its `total` fixes the
    /// remaining offsets (see [`crate::pagination`]). Each poll issues at
    /// most one request. The stream is not restartable: calling this again
    /// re-issues every request.
    ///
    /// # Errors
    ///
    /// Yields [`NpsError::Protocol`] if the first page has no `total`, and
    /// any error from fetching a page. The stream ends after the first error.
    pub fn pages<'a>(
        &'a self,
        resource: &'a str,
        page_size: u32,
    ) -> impl Stream<Item = Result<RawPage, NpsError>> + 'a {
        stream::try_unfold(Cursor::First, move |cursor| {
            self.advance(resource, page_size, cursor)
        })
    }

    async fn advance(
        &self,
        resource: &str,
        page_size: u32,
        cursor: Cursor,
    ) -> Result<Option<(RawPage, Cursor)>, NpsError> {
        match cursor {
            Cursor::First => {
                let url = self.page_url(resource, page_size, 0)?;
                let page = self.fetch_page(&url).await?;
                let total = page.total.ok_or_else(|| NpsError::Protocol {
                    url: url.to_string(),
                    reason: "unable to find key 'total'".to_owned(),
                })?;
                let requests = request_count(page_size, total);
                tracing::info!(resource, total, page_size, requests, "fetched first page");
                let offsets = PageOffsets::after_first(page_size, total);
                Ok(Some((page, Cursor::Following(offsets))))
            }
            Cursor::Following(mut offsets) => {
                let Some(start) = offsets.next() else {
                    return Ok(None);
                };
                let url = self.page_url(resource, page_size, start)?;
                let page = self.fetch_page(&url).await?;
                tracing::info!(resource, start, records = page.data.len(), "fetched page");
                Ok(Some((page, Cursor::Following(offsets))))
            }
        }
    }

    /// Fetches every page of `resource` and returns them in request order.
    ///
    /// **All-or-nothing**: if any page fails, pages already fetched are
    /// discarded and the error is returned.
    ///
    /// # Errors
    ///
    /// Propagates the first error yielded by [`Self::pages`].
    pub async fn fetch_all(
        &self,
        resource: &str,
        page_size: u32,
    ) -> Result<Vec<RawPage>, NpsError> {
        self.pages(resource, page_size).try_collect().await
    }

    /// Fetches every page of `resource` and concatenates their `data` arrays
    /// in page order.
    ///
    /// # Errors
    ///
    /// Propagates the first error yielded by [`Self::pages`].
    pub async fn fetch_all_records(
        &self,
        resource: &str,
        page_size: u32,
    ) -> Result<Vec<RawRecord>, NpsError> {
        let mut pages = pin!(self.pages(resource, page_size));
        let mut records = Vec::new();
        while let Some(page) = pages.try_next().await? {
            records.extend(page.data);
        }
        tracing::info!(resource, records = records.len(), "fetched all records");
        Ok(records)
    }
}
