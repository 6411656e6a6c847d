//! Wiki side of the sync: markdown documents, entity pages and file writes.

mod city;
mod document;
mod entity;
mod entry;
mod error;
mod event;
mod location;
mod person;
mod tag;
mod theme;
mod writer;

#[cfg(test)]
mod document_test;
#[cfg(test)]
mod entities_test;
#[cfg(test)]
mod writer_test;

pub use city::WikiCity;
pub use document::{
    Section, WikiBuilder, WikiDocument, date_link, date_list, name_list, slugify, wikilink,
};
pub use entity::{FromDatabase, WikiEntity};
pub use entry::WikiEntry;
pub use error::WikiError;
pub use event::WikiEvent;
pub use location::WikiLocation;
pub use person::WikiPerson;
pub use tag::WikiTag;
pub use theme::WikiTheme;
pub use writer::{WriteStatus, write_if_changed};
