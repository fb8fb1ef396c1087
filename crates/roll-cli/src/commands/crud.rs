//! Generic CRUD handlers, parameterized by an [`EntityScreen`].
//!
//! Every entity command goes through here; the screen supplies columns,
//! schema, permissions, and the collection path, and the handlers stay
//! entity-agnostic.

use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, bail};
use roll_api::{CrudResource, Notifier};
use roll_core::value::{FieldMap, FieldValue};
use roll_forms::{EditDialog, SubmitAction};
use roll_schema::display_value;
use roll_table::{DeleteConfirm, TableState, Viewer, build_view};

use crate::cli::{CrudCommands, GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output_json, print_table_view, records_to_json};
use crate::screens::EntityScreen;

/// Routes success notices to stdout and failures to stderr.
struct PrintNotifier {
    quiet: bool,
}

impl Notifier for PrintNotifier {
    fn success(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
    }

    fn error(&self, message: &str) {
        eprintln!("{message}");
    }
}

pub async fn handle(
    action: &CrudCommands,
    screen: EntityScreen,
    viewer: &Viewer,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut resource = resource_for(ctx, &screen, flags);
    match action {
        CrudCommands::List {
            filter,
            sort,
            desc,
            page,
            hidden,
        } => {
            resource.fetch_items().await?;
            let mut state = TableState::new(screen.filter_key, ctx.config.general.page_size);
            if let Some(query) = filter {
                state.set_filter(query.as_str());
            }
            if let Some(key) = sort {
                state.toggle_sort(key);
                if *desc {
                    state.toggle_sort(key);
                }
            }
            for key in hidden {
                state.toggle_column(key);
            }
            state.page = page.saturating_sub(1);
            match flags.format {
                OutputFormat::Json => output_json(&records_to_json(resource.items()))?,
                OutputFormat::Table => {
                    let view = build_view(
                        resource.items(),
                        &screen.columns,
                        &state,
                        &screen.permissions,
                        viewer,
                        false,
                    );
                    if !flags.quiet {
                        println!("{}", screen.title);
                    }
                    print_table_view(&view);
                }
            }
            Ok(())
        }
        CrudCommands::Show { id } => show(&mut resource, &screen, id, flags).await,
        CrudCommands::Add { set } => add(&mut resource, &screen, set).await,
        CrudCommands::Edit { id, set } => edit(&mut resource, &screen, viewer, id, set).await,
        CrudCommands::Rm { id, yes } => remove(&mut resource, &screen, viewer, id, *yes).await,
    }
}

/// Fetch a collection as records, outside any screen flow. Used for
/// foreign-key selectors that need another entity's list.
pub async fn fetch_records(
    ctx: &AppContext,
    screen: &EntityScreen,
) -> anyhow::Result<Vec<FieldMap>> {
    let mut resource = CrudResource::new(ctx.client.clone(), screen.path)
        .with_date_fields(screen.date_fields);
    resource.fetch_items().await?;
    Ok(resource.items().to_vec())
}

fn resource_for(ctx: &AppContext, screen: &EntityScreen, flags: &GlobalFlags) -> CrudResource {
    CrudResource::new(ctx.client.clone(), screen.path)
        .with_date_fields(screen.date_fields)
        .with_notifier(Arc::new(PrintNotifier { quiet: flags.quiet }))
}

async fn show(
    resource: &mut CrudResource,
    screen: &EntityScreen,
    id: &str,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    resource.fetch_items().await?;
    let record = find_record(resource.items(), screen, id)?;
    if flags.format == OutputFormat::Json {
        return output_json(&crate::output::record_to_json(&record));
    }
    let mut preview = roll_forms::PreviewCard::new(screen.columns.clone(), screen.schema.clone());
    preview.select(&record);
    for column in &screen.columns {
        if column.hidden {
            continue;
        }
        let value = preview.form().value(&column.key);
        println!("{}: {}", column.label, display_value(column, value));
    }
    Ok(())
}

async fn add(
    resource: &mut CrudResource,
    screen: &EntityScreen,
    set: &[String],
) -> anyhow::Result<()> {
    let mut dialog = EditDialog::new(screen.columns.clone(), screen.schema.clone());
    dialog.open(None);
    apply_assignments(&mut dialog, screen, set)?;
    match dialog.submit() {
        Some(SubmitAction::Insert(payload)) => {
            let result = resource.insert(&payload).await;
            dialog.complete_submit(result.is_ok());
            result?;
            Ok(())
        }
        Some(SubmitAction::Update(_)) => bail!("create dialog assembled an update"),
        None => {
            report_form_errors(&dialog, screen);
            bail!("輸入資料未通過驗證")
        }
    }
}

async fn edit(
    resource: &mut CrudResource,
    screen: &EntityScreen,
    viewer: &Viewer,
    id: &str,
    set: &[String],
) -> anyhow::Result<()> {
    resource.fetch_items().await?;
    let record = find_record(resource.items(), screen, id)?;
    if !(screen.permissions.can_edit)(&record, viewer) {
        bail!("沒有編輯這筆資料的權限");
    }
    let mut dialog = EditDialog::new(screen.columns.clone(), screen.schema.clone());
    dialog.open(Some(&record));
    apply_assignments(&mut dialog, screen, set)?;
    match dialog.submit() {
        Some(SubmitAction::Update(payload)) => {
            let result = resource.update(id, &payload).await;
            dialog.complete_submit(result.is_ok());
            result?;
            Ok(())
        }
        Some(SubmitAction::Insert(_)) => bail!("edit dialog assembled an insert"),
        None => {
            report_form_errors(&dialog, screen);
            bail!("輸入資料未通過驗證")
        }
    }
}

async fn remove(
    resource: &mut CrudResource,
    screen: &EntityScreen,
    viewer: &Viewer,
    id: &str,
    yes: bool,
) -> anyhow::Result<()> {
    resource.fetch_items().await?;
    let record = find_record(resource.items(), screen, id)?;
    if !(screen.permissions.can_delete)(&record, viewer) {
        bail!("沒有刪除這筆資料的權限");
    }
    let mut confirm = DeleteConfirm::default();
    confirm.request(id);
    if !yes && !prompt_yes(&format!("確定要刪除 {id} 嗎? (y/N) "))? {
        confirm.cancel();
        println!("已取消");
        return Ok(());
    }
    if let Some(target) = confirm.confirm() {
        resource.delete(&target).await?;
    }
    Ok(())
}

fn find_record(items: &[FieldMap], screen: &EntityScreen, id: &str) -> anyhow::Result<FieldMap> {
    items
        .iter()
        .find(|record| record.get("id").and_then(FieldValue::as_text) == Some(id))
        .cloned()
        .with_context(|| format!("{}裡找不到 {id}", screen.title))
}

/// Feed `KEY=VALUE` pairs through the dialog's change path so every value
/// is coerced and validated exactly as interactive edits are.
fn apply_assignments(
    dialog: &mut EditDialog,
    screen: &EntityScreen,
    set: &[String],
) -> anyhow::Result<()> {
    for entry in set {
        let Some((key, raw)) = entry.split_once('=') else {
            bail!("invalid assignment {entry:?}, expected KEY=VALUE");
        };
        if screen.column(key).is_none() {
            bail!("unknown field {key:?} for {}", screen.title);
        }
        dialog.change(key, raw);
    }
    Ok(())
}

fn report_form_errors(dialog: &EditDialog, screen: &EntityScreen) {
    for column in &screen.columns {
        if let Some(message) = dialog.form().error(&column.key) {
            eprintln!("{}: {message}", column.label);
        }
    }
}

fn prompt_yes(prompt: &str) -> anyhow::Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y"))
}
