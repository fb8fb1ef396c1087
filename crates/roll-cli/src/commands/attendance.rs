//! Attendance sheet commands.
//!
//! Sheets are keyed by date rather than id: `GET {path}/{date}` looks a day
//! up, a day with no sheet yet gets `POST`ed, an existing one gets `PUT`.
//! Marking always submits the full roster, so the sheet stays complete even
//! when only a few students were named on the command line.

use std::collections::BTreeMap;

use anyhow::{Context, bail};
use chrono::NaiveDate;
use roll_api::{ApiClient, ApiError};
use roll_core::entities::{AttendanceRecord, AttendanceStudent, AttendanceUpsertReq};
use roll_core::responses::ApiEnvelope;
use roll_core::value::{DATE_FORMAT, FieldMap, FieldValue};
use serde_json::Value as Json;

use crate::cli::{AttendanceCommands, GlobalFlags, OutputFormat};
use crate::commands::crud;
use crate::context::AppContext;
use crate::output::{output_json, table::render_table};
use crate::screens::students;

const PATH: &str = "attendance_records";

pub async fn handle(
    action: &AttendanceCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.sign_in().await?;
    match action {
        AttendanceCommands::Show { date } => show(ctx, flags, date.as_deref()).await,
        AttendanceCommands::Mark {
            date,
            present,
            absent,
            note,
        } => mark(ctx, flags, date.as_deref(), present, absent, note.as_deref()).await,
    }
}

async fn show(ctx: &AppContext, flags: &GlobalFlags, raw_date: Option<&str>) -> anyhow::Result<()> {
    let date = resolve_date(raw_date)?;
    let roster = crud::fetch_records(ctx, &students::screen()).await?;
    let sheet = fetch_sheet(&ctx.client, &date).await?;

    if flags.format == OutputFormat::Json {
        return output_json(&serde_json::json!({ "date": date, "record": sheet }));
    }

    let statuses = status_map(sheet.as_ref());
    let headers = vec!["學生".to_string(), "出席".to_string()];
    let rows: Vec<Vec<String>> = roster
        .iter()
        .map(|student| {
            vec![
                student_label(student),
                mark_for(&statuses, student_id(student)),
            ]
        })
        .collect();
    println!("{date} 簽到表");
    println!("{}", render_table(&headers, &rows));
    match &sheet {
        Some(record) => {
            if let Some(note) = record.note.as_deref().filter(|n| !n.is_empty()) {
                println!("備註: {note}");
            }
            if let Some(updated) = record.updated_at {
                println!("更新時間: {updated}");
            }
        }
        None => println!("這天還沒有簽到紀錄"),
    }
    Ok(())
}

async fn mark(
    ctx: &AppContext,
    flags: &GlobalFlags,
    raw_date: Option<&str>,
    present: &[String],
    absent: &[String],
    note: Option<&str>,
) -> anyhow::Result<()> {
    if present.is_empty() && absent.is_empty() && note.is_none() {
        bail!("沒有要更新的內容");
    }
    let date = resolve_date(raw_date)?;
    let roster = crud::fetch_records(ctx, &students::screen()).await?;
    check_named_students(&roster, present, absent)?;

    let existing = fetch_sheet(&ctx.client, &date).await?;
    let mut statuses = status_map(existing.as_ref());
    for id in present {
        statuses.insert(id.clone(), true);
    }
    for id in absent {
        statuses.insert(id.clone(), false);
    }
    // Per-student notes are only editable through the web console; carry
    // the existing ones through unchanged.
    let notes: BTreeMap<&str, Option<String>> = existing
        .as_ref()
        .map(|record| {
            record
                .attendance_students
                .iter()
                .map(|entry| (entry.student_id.as_str(), entry.note.clone()))
                .collect()
        })
        .unwrap_or_default();
    let attendance_students: Vec<AttendanceStudent> = roster
        .iter()
        .filter_map(student_id)
        .map(|id| AttendanceStudent {
            student_id: id.to_string(),
            attendance_status: statuses.get(id).copied().unwrap_or(false),
            note: notes.get(id).cloned().flatten(),
        })
        .collect();
    let note = note
        .map(str::to_string)
        .or_else(|| existing.as_ref().and_then(|record| record.note.clone()));

    let notice = if existing.is_some() {
        let payload = AttendanceUpsertReq {
            note,
            attendance_students,
        };
        let _: ApiEnvelope<Json> = ctx
            .client
            .put_json(&format!("{PATH}/{date}"), &payload)
            .await?;
        "更新成功"
    } else {
        let payload = AttendanceRecord {
            id: date.clone(),
            note,
            updated_at: None,
            attendance_students,
        };
        let _: ApiEnvelope<Json> = ctx.client.post_json(PATH, &payload).await?;
        "新增成功"
    };
    if !flags.quiet {
        println!("{notice}");
    }
    Ok(())
}

/// Look a day's sheet up. A missing day is not an error, it just means
/// nothing has been recorded yet.
async fn fetch_sheet(client: &ApiClient, date: &str) -> anyhow::Result<Option<AttendanceRecord>> {
    let result: Result<ApiEnvelope<AttendanceRecord>, ApiError> =
        client.get_json(&format!("{PATH}/{date}")).await;
    match result {
        Ok(envelope) => Ok(envelope.data),
        Err(ApiError::Api { status: 404, .. }) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn resolve_date(raw: Option<&str>) -> anyhow::Result<String> {
    let date = match raw {
        Some(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
            .with_context(|| format!("日期格式不正確: {s}, 請用 YYYY-MM-DD"))?,
        None => chrono::Local::now().date_naive(),
    };
    Ok(date.format(DATE_FORMAT).to_string())
}

fn status_map(sheet: Option<&AttendanceRecord>) -> BTreeMap<String, bool> {
    sheet
        .map(|record| {
            record
                .attendance_students
                .iter()
                .map(|entry| (entry.student_id.clone(), entry.attendance_status))
                .collect()
        })
        .unwrap_or_default()
}

fn check_named_students(
    roster: &[FieldMap],
    present: &[String],
    absent: &[String],
) -> anyhow::Result<()> {
    for id in present.iter().chain(absent) {
        if !roster.iter().any(|s| student_id(s) == Some(id.as_str())) {
            bail!("找不到學生 {id}");
        }
    }
    for id in present {
        if absent.contains(id) {
            bail!("{id} 同時被標記為出席與缺席");
        }
    }
    Ok(())
}

fn student_id(student: &FieldMap) -> Option<&str> {
    student.get("id").and_then(FieldValue::as_text)
}

fn student_label(student: &FieldMap) -> String {
    student
        .get("name")
        .and_then(FieldValue::as_text)
        .unwrap_or("(未命名)")
        .to_string()
}

fn mark_for(statuses: &BTreeMap<String, bool>, id: Option<&str>) -> String {
    let present = id.is_some_and(|id| statuses.get(id).copied().unwrap_or(false));
    if present { "是" } else { "否" }.to_string()
}
