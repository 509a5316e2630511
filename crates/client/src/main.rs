//! grafana-client CLI entry point.

use anyhow::Context;
use clap::Parser;
use grafana_client::cli::{Cli, Commands};
use grafana_client::output::{pretty, render};
use grafana_client::GrafanaClient;
use grafana_core::query::{AlertQuery, OrgQuery, TeamQuery, UserQuery};
use grafana_core::types::{ApiKeyForm, TeamForm};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grafana_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = cli
        .client_config()
        .context("failed to load client configuration")?;
    tracing::debug!(base_url = %config.base_url, "using Grafana");
    let client = GrafanaClient::new(&config)?;
    let format = cli.format;

    match cli.command {
        Commands::Users(users_cmd) => {
            use grafana_client::cli::users::UsersAction;
            match users_cmd.action {
                UsersAction::List {
                    query,
                    page,
                    per_page,
                } => {
                    let users = client
                        .users()
                        .list(&UserQuery {
                            query,
                            page,
                            per_page,
                        })
                        .await?;
                    println!("{}", render(&users[..], format, pretty::format_users));
                }
                UsersAction::Get { id } => {
                    let user = client.users().get_by_id(id).await?;
                    println!("{}", render(&user, format, pretty::format_user));
                }
                UsersAction::Lookup { login_or_email } => {
                    let user = client.users().lookup(&login_or_email).await?;
                    println!("{}", render(&user, format, pretty::format_user));
                }
                UsersAction::Orgs { id } => {
                    let orgs = client.users().orgs(id).await?;
                    println!("{}", render(&orgs[..], format, pretty::format_user_orgs));
                }
            }
        }
        Commands::Teams(teams_cmd) => {
            use grafana_client::cli::teams::TeamsAction;
            match teams_cmd.action {
                TeamsAction::Search {
                    query,
                    name,
                    page,
                    per_page,
                } => {
                    let teams = client
                        .teams()
                        .search(&TeamQuery {
                            per_page,
                            page,
                            query,
                            name,
                        })
                        .await?;
                    println!("{}", render(&teams, format, pretty::format_teams));
                }
                TeamsAction::Get { id } => {
                    let team = client.teams().get_by_id(id).await?;
                    println!("{}", render(&team, format, pretty::format_team));
                }
                TeamsAction::Members { id } => {
                    let members = client.teams().members(id).await?;
                    println!(
                        "{}",
                        render(&members[..], format, pretty::format_team_members)
                    );
                }
                TeamsAction::Create { name, email } => {
                    let created = client.teams().create(&TeamForm { name, email }).await?;
                    println!(
                        "{}",
                        render(&created, format, |c| format!("Created team {}", c.team_id))
                    );
                }
                TeamsAction::Delete { id } => {
                    client.teams().delete(id).await?;
                    if !cli.quiet {
                        println!("Deleted team {}", id);
                    }
                }
                TeamsAction::AddMember { team_id, user_id } => {
                    client.teams().add_member(team_id, user_id).await?;
                    if !cli.quiet {
                        println!("Added user {} to team {}", user_id, team_id);
                    }
                }
                TeamsAction::RemoveMember { team_id, user_id } => {
                    client.teams().remove_member(team_id, user_id).await?;
                    if !cli.quiet {
                        println!("Removed user {} from team {}", user_id, team_id);
                    }
                }
            }
        }
        Commands::Orgs(orgs_cmd) => {
            use grafana_client::cli::orgs::OrgsAction;
            match orgs_cmd.action {
                OrgsAction::List { query } => {
                    let orgs = client
                        .orgs()
                        .search(&OrgQuery { query, name: None })
                        .await?;
                    println!("{}", render(&orgs[..], format, pretty::format_orgs));
                }
                OrgsAction::Get { id } => {
                    let org = client.orgs().get_by_id(id).await?;
                    println!("{}", render(&org, format, pretty::format_org));
                }
                OrgsAction::Create { name } => {
                    let created = client.orgs().create(&name).await?;
                    println!(
                        "{}",
                        render(&created, format, |c| format!("Created organization {}", c.org_id))
                    );
                }
                OrgsAction::Delete { id } => {
                    client.orgs().delete(id).await?;
                    if !cli.quiet {
                        println!("Deleted organization {}", id);
                    }
                }
            }
        }
        Commands::Folders(folders_cmd) => {
            use grafana_client::cli::folders::FoldersAction;
            match folders_cmd.action {
                FoldersAction::List { limit } => {
                    let folders = client.folders().list(limit).await?;
                    println!("{}", render(&folders[..], format, pretty::format_folders));
                }
                FoldersAction::Get { uid } => {
                    let folder = client.folders().get_by_uid(&uid).await?;
                    println!("{}", render(&folder, format, pretty::format_folder));
                }
                FoldersAction::Create { title, uid } => {
                    let folder = client.folders().create(&title, &uid).await?;
                    println!(
                        "{}",
                        render(&folder, format, |f| format!(
                            "Created:\n{}",
                            pretty::format_folder(f)
                        ))
                    );
                }
                FoldersAction::Delete { uid } => {
                    client.folders().delete(&uid).await?;
                    if !cli.quiet {
                        println!("Deleted folder {}", uid);
                    }
                }
            }
        }
        Commands::Datasources(datasources_cmd) => {
            use grafana_client::cli::datasources::DataSourcesAction;
            match datasources_cmd.action {
                DataSourcesAction::List => {
                    let datasources = client.datasources().list().await?;
                    println!(
                        "{}",
                        render(&datasources[..], format, pretty::format_datasources)
                    );
                }
                DataSourcesAction::Get { id } => {
                    let datasource = client.datasources().get_by_id(id).await?;
                    println!("{}", render(&datasource, format, pretty::format_datasource));
                }
                DataSourcesAction::Delete { id } => {
                    client.datasources().delete(id).await?;
                    if !cli.quiet {
                        println!("Deleted data source {}", id);
                    }
                }
            }
        }
        Commands::Keys(keys_cmd) => {
            use grafana_client::cli::keys::KeysAction;
            match keys_cmd.action {
                KeysAction::List => {
                    let keys = client.keys().list().await?;
                    println!("{}", render(&keys[..], format, pretty::format_keys));
                }
                KeysAction::Create {
                    name,
                    role,
                    seconds_to_live,
                } => {
                    let key = client
                        .keys()
                        .create(&ApiKeyForm {
                            name,
                            role,
                            seconds_to_live,
                        })
                        .await?;
                    println!("{}", render(&key, format, pretty::format_created_key));
                }
                KeysAction::Delete { id } => {
                    client.keys().delete(id).await?;
                    if !cli.quiet {
                        println!("Deleted API key {}", id);
                    }
                }
            }
        }
        Commands::Search(search_args) => {
            let results = client.search().query(&search_args.to_query()).await?;
            println!(
                "{}",
                render(&results[..], format, pretty::format_search_results)
            );
        }
        Commands::Admin(admin_cmd) => {
            use grafana_client::cli::admin::AdminAction;
            match admin_cmd.action {
                AdminAction::Stats => {
                    let stats = client.admin().stats().await?;
                    println!("{}", render(&stats, format, pretty::format_stats));
                }
            }
        }
        Commands::Alerts(alerts_cmd) => {
            use grafana_client::cli::alerts::AlertsAction;
            match alerts_cmd.action {
                AlertsAction::List {
                    states,
                    dashboard_id,
                    limit,
                } => {
                    let query = AlertQuery {
                        states,
                        dashboard_ids: dashboard_id.into_iter().collect(),
                        limit,
                        ..AlertQuery::default()
                    };
                    let alerts = client.alerts().list(&query).await?;
                    println!("{}", render(&alerts[..], format, pretty::format_alerts));
                }
                AlertsAction::Pause { id, resume } => {
                    let response = client.alerts().pause(id, !resume).await?;
                    println!(
                        "{}",
                        render(&response, format, |r| format!(
                            "Alert {}: {}",
                            r.alert_id, r.message
                        ))
                    );
                }
            }
        }
    }

    Ok(())
}
