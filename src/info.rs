use crate::refs::{ObjectReferences, RefType};
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// Metadata written to the document information dictionary of a label sheet PDF.
///
/// Print dialogs and file browsers usually show the title, so it is worth naming
/// the mailing (e.g. "Christmas cards 2026").
#[derive(Default, Debug, Clone)]
pub struct Info {
    pub title: Option<String>,
    /// Who the mailing is from
    pub author: Option<String>,
    /// Filled in with the label count and sheet capacity when left empty
    pub subject: Option<String>,
    pub keywords: Option<String>,
}

impl Info {
    pub fn new() -> Info {
        Info::default()
    }

    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn author<S: ToString>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn subject<S: ToString>(&mut self, subject: S) -> &mut Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Comma separated is what most viewers expect
    pub fn keywords<S: ToString>(&mut self, keywords: S) -> &mut Self {
        self.keywords = Some(keywords.to_string());
        self
    }

    /// Describe the run in the subject, unless the caller already set one
    pub(crate) fn describe_labels(&mut self, labels: usize, per_sheet: usize) {
        if self.subject.is_none() {
            self.subject = Some(format!(
                "{labels} address label(s), {per_sheet} per sheet"
            ));
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        if let Some(title) = &self.title {
            info.title(TextStr(title.as_str()));
        }
        if let Some(author) = &self.author {
            info.author(TextStr(author.as_str()));
        }
        if let Some(subject) = &self.subject {
            info.subject(TextStr(subject.as_str()));
        }
        if let Some(keywords) = &self.keywords {
            info.keywords(TextStr(keywords.as_str()));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));
        info.creation_date(creation_date());
    }
}

fn creation_date() -> PDate {
    use chrono::prelude::*;
    let now = Local::now();
    let offset = now.offset().fix().local_minus_utc();
    let offset_hours = offset / (60 * 60);
    let offset_minutes = ((offset - offset_hours * 60 * 60) / 60).abs();
    PDate::new(now.year() as u16)
        .month(now.month() as u8)
        .day(now.day() as u8)
        .hour(now.hour() as u8)
        .minute(now.minute() as u8)
        .second(now.second() as u8)
        .utc_offset_hour(offset_hours as i8)
        .utc_offset_minute(offset_minutes as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_described_only_without_a_subject() {
        let mut info = Info::new();
        info.describe_labels(30, 24);
        assert_eq!(info.subject.as_deref(), Some("30 address label(s), 24 per sheet"));

        let mut info = Info::new();
        info.subject("Invitations").describe_labels(30, 24);
        assert_eq!(info.subject.as_deref(), Some("Invitations"));
    }
}
