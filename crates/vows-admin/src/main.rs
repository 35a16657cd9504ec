//! Operator console for the wedding site.
//!
//! Signs in with the administrator credentials from the environment and
//! runs one command against the hosted data provider:
//!
//! ```text
//! vows-admin stats                  # RSVP dashboard summary
//! vows-admin guests [term]          # list (optionally filtered) responses
//! vows-admin export                 # responses as CSV on stdout
//! vows-admin invite <name> [size]   # issue a custom invite, print its link
//! vows-admin settings               # dump the site settings record
//! ```
//!
//! Configuration: `VOWS_PROVIDER_URL`, `VOWS_API_KEY`, `VOWS_SITE_ORIGIN`,
//! plus `VOWS_ADMIN_EMAIL` / `VOWS_ADMIN_PASSWORD` for the sign-in.

use anyhow::{bail, Context};

use vows_client::{invites::InviteDraft, AdminSession};
use vows_provider::ProviderConfig;
use vows_shared::constants::DEFAULT_MAX_PARTY_SIZE;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vows_client::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first().map(String::as_str) else {
        print_usage();
        return Ok(());
    };

    let config = ProviderConfig::from_env();
    tracing::info!(provider = %config.base_url, "Connecting");

    let (mut session, mut notices) = AdminSession::connect(config);
    sign_in(&mut session).await?;

    match command {
        "stats" => {
            session.guests.refresh().await?;
            let summary = session.guests.summary();
            println!("Total RSVPs:      {}", summary.total);
            println!("Attending:        {}", summary.attending);
            println!("Not attending:    {}", summary.not_attending);
            println!("Pending:          {}", summary.pending);
            println!("Total party size: {}", summary.total_party_size);
            println!("Plus-ones:        {}", summary.plus_ones);
            println!("Response rate:    {:.0}%", summary.response_rate());
            println!("Attendance rate:  {:.0}%", summary.attendance_rate());
        }
        "guests" => {
            session.guests.refresh().await?;
            let term = args.get(1).map(String::as_str).unwrap_or("");
            let rows = session.guests.search(term);
            println!(
                "Showing {} of {} responses",
                rows.len(),
                session.guests.responses().len()
            );
            for r in rows {
                println!(
                    "{:<24} {:<28} {:<14} party {:>2}  {}",
                    r.name,
                    r.email,
                    r.attendance_status.to_string(),
                    r.party_size,
                    r.dietary_restrictions.as_deref().unwrap_or("-"),
                );
            }
        }
        "export" => {
            session.guests.refresh().await?;
            print!("{}", session.guests.export_csv());
        }
        "invite" => {
            let Some(guest_name) = args.get(1) else {
                bail!("usage: vows-admin invite <name> [max party size]");
            };
            let max_party_size = match args.get(2) {
                Some(raw) => raw
                    .parse()
                    .with_context(|| format!("invalid party size: {raw}"))?,
                None => DEFAULT_MAX_PARTY_SIZE,
            };

            let code = session
                .invites
                .create(InviteDraft {
                    guest_name: guest_name.clone(),
                    guest_email: None,
                    max_party_size,
                    custom_message: None,
                    expires_at: None,
                })
                .await?;
            println!("{}", session.invites.invite_url(&code));
        }
        "settings" => {
            session.settings.load().await;
            println!("{}", serde_json::to_string_pretty(session.settings.settings())?);
        }
        other => {
            print_usage();
            bail!("unknown command: {other}");
        }
    }

    // Surface any notices the managers emitted along the way.
    while let Ok(notice) = notices.try_recv() {
        eprintln!("[{}] {}", notice.title, notice.body);
    }

    Ok(())
}

async fn sign_in(session: &mut AdminSession) -> anyhow::Result<()> {
    let email = std::env::var("VOWS_ADMIN_EMAIL")
        .context("VOWS_ADMIN_EMAIL is not set")?;
    let password = std::env::var("VOWS_ADMIN_PASSWORD")
        .context("VOWS_ADMIN_PASSWORD is not set")?;

    session
        .sign_in(&email, &password)
        .await
        .context("sign-in failed")?;
    Ok(())
}

fn print_usage() {
    eprintln!("usage: vows-admin <stats|guests [term]|export|invite <name> [size]|settings>");
}
