//! Command handlers for the `roll` binary.

pub mod attendance;
pub mod auth;
pub mod crud;
pub mod dashboard;

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;
use crate::screens;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Login => auth::login(ctx, flags).await,
        Commands::Logout => auth::logout(ctx, flags).await,
        Commands::Whoami => auth::whoami(ctx, flags).await,
        Commands::Dashboard => dashboard::handle(ctx, flags).await,
        Commands::Students { action } => {
            let (_, viewer) = ctx.sign_in_viewer().await?;
            crud::handle(&action, screens::students::screen(), &viewer, ctx, flags).await
        }
        Commands::Teachers { action } => {
            let (_, viewer) = ctx.sign_in_viewer().await?;
            crud::handle(&action, screens::teachers::screen(), &viewer, ctx, flags).await
        }
        Commands::Members { action } => {
            let (_, viewer) = ctx.sign_in_viewer().await?;
            crud::handle(&action, screens::members::screen(), &viewer, ctx, flags).await
        }
        Commands::Grades { action } => {
            let (_, viewer) = ctx.sign_in_viewer().await?;
            // The grade screen's student selector is built from the live
            // student list.
            let students = crud::fetch_records(ctx, &screens::students::screen()).await?;
            crud::handle(&action, screens::grades::screen(&students), &viewer, ctx, flags).await
        }
        Commands::Announcements { action } => {
            let (_, viewer) = ctx.sign_in_viewer().await?;
            crud::handle(&action, screens::announcements::screen(), &viewer, ctx, flags).await
        }
        Commands::Attendance { action } => attendance::handle(&action, ctx, flags).await,
    }
}
