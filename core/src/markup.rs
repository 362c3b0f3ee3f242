//! Print content markup.
//!
//! The printer interprets a small tag language embedded in the `content`
//! field. The client never rewrites content it is handed (apart from the
//! repeat directive), so these helpers are the only place tags are produced.
//!
//! | Tag | Effect |
//! |---|---|
//! | `<FS>` | enlarged font |
//! | `<FB>` | bold |
//! | `<FH>` | double height |
//! | `<FW>` | double width |
//! | `<center>` / `<right>` | alignment |
//! | `<table><tr><td>` | 3 or 4 column row layout |
//! | `\t` | jump to the next 4-character tab stop |
//! | `<MN>` | repeat count, 1 to 9 |
//! | `<QR>` | QR code, at most 96 characters |
//! | `<BR>` | 13 digit barcode, zero padded by the server |

use crate::error::MarkupError;

pub const QR_MAX_CHARS: usize = 96;
pub const BARCODE_DIGITS: usize = 13;

/// Wrap `text` in a QR tag.
pub fn encode_qr(text: &str) -> Result<String, MarkupError> {
    let len = text.chars().count();
    if len > QR_MAX_CHARS {
        return Err(MarkupError::QrTooLong { len });
    }
    Ok(format!("<QR>{text}</QR>"))
}

/// Wrap `text` in a barcode tag, keeping only the first 13 digits.
pub fn encode_barcode(text: &str) -> Result<String, MarkupError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MarkupError::BarcodeNotNumeric);
    }
    // all ASCII, so byte slicing is char slicing
    let digits = &text[..text.len().min(BARCODE_DIGITS)];
    Ok(format!("<BR>{digits}</BR>"))
}

/// The repeat directive for `count` copies, if `count` is in 1..=9.
pub fn repeat_directive(count: u8) -> Option<String> {
    (count > 0 && count < 10).then(|| format!("<MN>{count}</MN>"))
}

/// Incremental builder for print content.
///
/// ```
/// use yly_core::markup::Content;
///
/// let content = Content::new()
///     .center("Receipt")
///     .line()
///     .table(&[["Item", "Qty", "Price"], ["Tea", "2", "8.00"]])?
///     .qr("https://example.com/r/42")?
///     .build();
/// assert!(content.starts_with("<center>Receipt</center>\n<table>"));
/// # Ok::<(), yly_core::MarkupError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Content {
    buf: String,
}

impl Content {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain text, passed through untouched.
    pub fn text(mut self, s: &str) -> Self {
        self.buf.push_str(s);
        self
    }

    pub fn line(mut self) -> Self {
        self.buf.push('\n');
        self
    }

    pub fn tab(mut self) -> Self {
        self.buf.push('\t');
        self
    }

    pub fn bold(self, s: &str) -> Self {
        self.wrap("FB", s)
    }

    pub fn large(self, s: &str) -> Self {
        self.wrap("FS", s)
    }

    pub fn tall(self, s: &str) -> Self {
        self.wrap("FH", s)
    }

    pub fn wide(self, s: &str) -> Self {
        self.wrap("FW", s)
    }

    pub fn center(self, s: &str) -> Self {
        self.wrap("center", s)
    }

    pub fn right(self, s: &str) -> Self {
        self.wrap("right", s)
    }

    pub fn qr(mut self, s: &str) -> Result<Self, MarkupError> {
        self.buf.push_str(&encode_qr(s)?);
        Ok(self)
    }

    pub fn barcode(mut self, s: &str) -> Result<Self, MarkupError> {
        self.buf.push_str(&encode_barcode(s)?);
        Ok(self)
    }

    /// Append a table. Each row must have 3 or 4 cells, and cells may not
    /// contain line breaks or further tags.
    pub fn table<R, C>(mut self, rows: &[R]) -> Result<Self, MarkupError>
    where
        R: AsRef<[C]>,
        C: AsRef<str>,
    {
        let mut out = String::from("<table>");
        for (r, row) in rows.iter().enumerate() {
            let cells = row.as_ref();
            if !(3..=4).contains(&cells.len()) {
                return Err(MarkupError::TableColumns {
                    row: r,
                    cells: cells.len(),
                });
            }
            out.push_str("<tr>");
            for (c, cell) in cells.iter().enumerate() {
                let cell = cell.as_ref();
                if cell.contains(['\r', '\n', '<', '>']) {
                    return Err(MarkupError::TableCell { row: r, cell: c });
                }
                out.push_str("<td>");
                out.push_str(cell);
                out.push_str("</td>");
            }
            out.push_str("</tr>");
        }
        out.push_str("</table>");
        self.buf.push_str(&out);
        Ok(self)
    }

    pub fn build(self) -> String {
        self.buf
    }

    fn wrap(mut self, tag: &str, s: &str) -> Self {
        self.buf.push_str(&format!("<{tag}>{s}</{tag}>"));
        self
    }
}
