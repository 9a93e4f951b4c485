// Rust guideline compliant 2026-10-18

//! Implementation of the `petlar list` command.

use crate::OutputFormatter;
use anyhow::Result;
use petlar_app::{list_reservations, parse_filter_status, AppContext, ListOptions};

/// Lists reservations as composed views.
///
/// An explicit `--status` replaces the context's current filter; otherwise
/// the filter configured as `default_filter` applies.
///
/// # Arguments
///
/// * `context` - Application context for the data directory
/// * `status` - Optional status filter (`all` or a status literal)
/// * `tutor` - Optional tutor id filter
/// * `host` - Optional host id filter
/// * `sort` - Optional sort field
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if:
/// - The status filter is not a status or `all`
/// - A record file cannot be read or contains an invalid record
pub fn execute(
    context: &mut AppContext,
    status: Option<String>,
    tutor: Option<String>,
    host: Option<String>,
    sort: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    if let Some(status) = status {
        context.set_filter(parse_filter_status(&status)?);
    }

    let catalog = context.load_catalog()?;
    let options = ListOptions {
        status: context.filter(),
        tutor_id: tutor,
        host_id: host,
        sort,
    };

    let views = list_reservations(&catalog, &options);
    tracing::info!(
        filter = %options.status,
        count = views.len(),
        "Listed reservations"
    );
    println!("{}", formatter.format_list(&views));

    Ok(())
}
