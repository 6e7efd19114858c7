//! # Markdown Documentation
//!
//! Renders the operation catalog as a markdown page: one section per
//! operation with parameter and response tables.

use crate::operation::{StoreOperation, ORDER_ID_BOUNDS};
use std::fmt::Write;

/// Escape text placed inside a markdown table cell
pub fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Render the Store API docs for the given base path
pub fn render_markdown(base_path: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "# StoreApi\n");
    let _ = writeln!(out, "All URIs are relative to `{}`\n", display_base(base_path));
    let _ = writeln!(out, "| Method | HTTP request | Description |");
    let _ = writeln!(out, "|--------|--------------|-------------|");
    for op in StoreOperation::ALL {
        let _ = writeln!(
            out,
            "| [**{}**](#{}) | **{}** {} | {} |",
            op.nickname(),
            op.nickname().to_lowercase(),
            op.method().as_str(),
            op.path(),
            escape_cell(op.summary())
        );
    }

    for op in StoreOperation::ALL {
        out.push('\n');
        render_operation(&mut out, op);
    }

    out
}

fn display_base(base_path: &str) -> &str {
    if base_path.is_empty() {
        "/"
    } else {
        base_path
    }
}

fn render_operation(out: &mut String, op: StoreOperation) {
    let _ = writeln!(out, "## {}\n", op.nickname());
    let _ = writeln!(out, "> {} {}\n", op.method().as_str(), op.path());
    let _ = writeln!(out, "{}\n", op.summary());
    if !op.notes().is_empty() {
        let _ = writeln!(out, "{}\n", op.notes());
    }

    let _ = writeln!(out, "### Parameters\n");
    if op.params().is_empty() {
        let _ = writeln!(out, "This endpoint does not need any parameter.\n");
    } else {
        let _ = writeln!(out, "| Name | In | Type | Description | Notes |");
        let _ = writeln!(out, "|------|----|------|-------------|-------|");
        for param in op.params() {
            let notes = match (op, param.required) {
                (StoreOperation::GetOrderById, _) => format!(
                    "[required] [min: {}] [max: {}]",
                    ORDER_ID_BOUNDS.min, ORDER_ID_BOUNDS.max
                ),
                (_, true) => "[required]".to_string(),
                (_, false) => "[optional]".to_string(),
            };
            let _ = writeln!(
                out,
                "| **{}** | {} | **{}** | {} | {} |",
                param.name,
                param.location.as_str(),
                param.type_name,
                escape_cell(param.description),
                notes
            );
        }
        out.push('\n');
    }

    let _ = writeln!(out, "### Responses\n");
    let _ = writeln!(out, "| Code | Description | Body |");
    let _ = writeln!(out, "|------|-------------|------|");
    for response in op.responses() {
        let _ = writeln!(
            out,
            "| {} | {} | {} |",
            response.code,
            escape_cell(response.message),
            escape_cell(response.body.unwrap_or("(empty)"))
        );
    }
    out.push('\n');

    let _ = writeln!(out, "### Authorization\n");
    if op.requires_api_key() {
        let _ = writeln!(out, "api_key\n");
    } else {
        let _ = writeln!(out, "No authorization required\n");
    }

    let _ = writeln!(out, "### HTTP request headers\n");
    let _ = writeln!(out, "- **Content-Type**: {}", media_list(op.consumes()));
    let _ = writeln!(out, "- **Accept**: {}", media_list(op.produces()));
}

fn media_list(types: &[&str]) -> String {
    if types.is_empty() {
        "Not defined".to_string()
    } else {
        types.join(", ")
    }
}
