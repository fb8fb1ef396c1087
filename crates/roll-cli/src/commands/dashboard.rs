//! The landing view: the announcement feed, newest first.

use roll_api::CrudResource;
use roll_core::value::{FieldMap, FieldValue};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output_json, records_to_json};
use crate::screens::announcements;

pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.sign_in().await?;
    let screen = announcements::screen();
    let mut resource =
        CrudResource::new(ctx.client.clone(), screen.path).with_date_fields(screen.date_fields);
    resource.fetch_items().await?;

    let mut feed: Vec<&FieldMap> = resource.items().iter().collect();
    feed.sort_by(|a, b| text_of(b, "created_at").cmp(&text_of(a, "created_at")));

    if flags.format == OutputFormat::Json {
        let owned: Vec<FieldMap> = feed.into_iter().cloned().collect();
        return output_json(&records_to_json(&owned));
    }
    if feed.is_empty() {
        println!("目前沒有公告");
        return Ok(());
    }
    for record in feed {
        println!(
            "{} ({} {})",
            text_of(record, "title").unwrap_or_default(),
            text_of(record, "teacher_name").unwrap_or_default(),
            text_of(record, "created_at").unwrap_or_default(),
        );
        if let Some(content) = text_of(record, "content") {
            for line in content.lines() {
                println!("  {line}");
            }
        }
        println!();
    }
    Ok(())
}

fn text_of<'a>(record: &'a FieldMap, key: &str) -> Option<&'a str> {
    record.get(key).and_then(FieldValue::as_text)
}
