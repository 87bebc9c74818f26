//! Review 섹션 렌더러

use std::io::{self, Write};

use super::util::{write_blank, write_field, write_text_field};
use crate::model::Review;

pub fn render_review<W: Write + ?Sized>(rev: &Review, w: &mut W) -> io::Result<()> {
    if let Some(reviewer) = rev.reviewer.as_ref().filter(|r| !r.name.is_empty()) {
        writeln!(w, "Reviewer: {reviewer}")?;
    }
    write_field(w, "ReviewDate", &rev.date)?;
    write_text_field(w, "ReviewComment", &rev.comment)?;

    write_blank(w)
}
