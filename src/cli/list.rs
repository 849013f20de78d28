//! `embedweb list`: print the table a build would emit.
//!
//! Rows come out in table order, i.e. the order the firmware binary
//! searches. Output goes to stdout; logs stay on stderr so `--json` can be
//! piped.

use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};

use crate::{
    asset::{AssetTable, CompiledAssetRecord},
    cli::{ListArgs, absolute_dist, compile_dist},
    config::EmbedConfig,
    utils::fmt::{format_size, plural_count, ratio_percent},
};

/// One row of `list` output.
#[derive(Debug, Serialize)]
pub struct ListEntry<'a> {
    pub path: &'a str,
    pub mime_type: &'a str,
    pub identifier: &'a str,
    pub original_len: usize,
    pub compressed_len: usize,
}

impl<'a> From<&'a CompiledAssetRecord> for ListEntry<'a> {
    fn from(record: &'a CompiledAssetRecord) -> Self {
        Self {
            path: &record.served_path,
            mime_type: &record.mime_type,
            identifier: &record.identifier,
            original_len: record.original_len,
            compressed_len: record.compressed_len(),
        }
    }
}

/// Run the list command.
pub fn list_assets(args: &ListArgs, config: &EmbedConfig) -> Result<()> {
    let dist = absolute_dist(&args.dist)?;
    let table = compile_dist(&dist, config, &config.mime_table())?;

    let mut out = io::stdout().lock();
    if args.json {
        write_json(&mut out, &table)?;
    } else {
        write_table(&mut out, &table)?;
    }
    out.flush()?;
    Ok(())
}

fn write_json(out: &mut impl Write, table: &AssetTable) -> Result<()> {
    let entries: Vec<ListEntry> = table.iter().map(ListEntry::from).collect();
    serde_json::to_writer_pretty(&mut *out, &entries)?;
    writeln!(out)?;
    Ok(())
}

fn write_table(out: &mut impl Write, table: &AssetTable) -> Result<()> {
    let path_width = table
        .iter()
        .map(|r| r.served_path.chars().count())
        .chain(["PATH".len()])
        .max()
        .unwrap_or_default();
    let mime_width = table
        .iter()
        .map(|r| r.mime_type.len())
        .chain(["MIME".len()])
        .max()
        .unwrap_or_default();

    writeln!(
        out,
        "{:<path_width$}  {:<mime_width$}  {:>10}  {:>10}",
        "PATH", "MIME", "SIZE", "GZIP"
    )?;
    for record in table.iter() {
        let mime = if record.mime_type.is_empty() { "-" } else { record.mime_type.as_str() };
        writeln!(
            out,
            "{:<path_width$}  {:<mime_width$}  {:>10}  {:>10}",
            record.served_path,
            mime,
            format_size(record.original_len),
            format_size(record.compressed_len())
        )?;
    }
    writeln!(
        out,
        "{}, {} -> {} ({:.1}%)",
        plural_count(table.len(), "asset"),
        format_size(table.original_bytes()),
        format_size(table.compressed_bytes()),
        ratio_percent(table.compressed_bytes(), table.original_bytes())
    )?;
    Ok(())
}
