//! Session commands: login, logout, whoami.

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output_json;

pub async fn login(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let me = ctx.sign_in().await?;
    if !flags.quiet {
        println!("登入成功: {} ({})", me.name, me.role);
    }
    Ok(())
}

/// Sign in with the configured credentials, then invalidate that session on
/// the server. Useful for revoking a cookie a previous run left behind.
pub async fn logout(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.sign_in().await?;
    ctx.auth.logout().await;
    if !flags.quiet {
        println!("已登出");
    }
    Ok(())
}

pub async fn whoami(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let me = ctx.sign_in().await?;
    match flags.format {
        OutputFormat::Json => output_json(&me),
        OutputFormat::Table => {
            println!("id: {}", me.id);
            println!("姓名: {}", me.name);
            println!("角色: {}", me.role);
            if let Some(expires) = me.expires_at() {
                println!("登入效期至: {expires}");
            }
            Ok(())
        }
    }
}
