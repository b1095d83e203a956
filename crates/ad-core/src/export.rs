//! CSV export of the whole listing collection.

use crate::Listing;

pub const CSV_HEADER: &str = "ID,Title,Description,City,Price,Phone,Email,Handle,CreatedAt";

/// Render all listings as comma-separated text with a header row.
pub fn export_csv(listings: &[Listing]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for listing in listings {
        let row = [
            escape(&listing.id.to_string()),
            escape(&listing.title),
            escape(&listing.description),
            escape(&listing.city),
            escape(&listing.price.to_string()),
            escape(listing.contacts.phone_or_default()),
            escape(listing.contacts.email_or_default()),
            escape(listing.contacts.handle_or_default()),
            escape(&listing.created_at.to_rfc3339()),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// Quote a field containing the delimiter, a quote, or a line break;
/// embedded quotes are doubled.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
