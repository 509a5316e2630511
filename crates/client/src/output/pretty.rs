//! Pretty output formatting.

use grafana_core::types::{
    AdminStats, Alert, ApiKey, CreatedApiKey, DataSource, Folder, Org, SearchResult, SearchType,
    SimpleFolder, SimpleOrg, Team, TeamMember, TeamSearchPage, UserOrg, UserProfile,
    UserSearchHit,
};

fn format_list<T>(title: &str, empty: &str, items: &[T], format: impl Fn(&T) -> String) -> String {
    if items.is_empty() {
        return empty.to_string();
    }
    let mut output = format!("{} ({})\n", title, items.len());
    output.push_str(&"-".repeat(40));
    for item in items {
        output.push_str(&format!("\n{}", format(item)));
        output.push('\n');
    }
    output
}

/// Format a user for display.
pub fn format_user(user: &UserProfile) -> String {
    let mut output = format!(
        "{} ({})\n  ID: {}\n  Email: {}\n  Org: {}",
        user.name, user.login, user.id, user.email, user.org_id
    );
    if user.is_grafana_admin {
        output.push_str("\n  Grafana admin");
    }
    output
}

fn format_user_hit(user: &UserSearchHit) -> String {
    let mut output = format!(
        "{} ({})\n  ID: {}\n  Email: {}",
        user.name, user.login, user.id, user.email
    );
    if !user.last_seen_at_age.is_empty() {
        output.push_str(&format!("\n  Last seen: {}", user.last_seen_at_age));
    }
    output
}

/// Format users for display.
pub fn format_users(users: &[UserSearchHit]) -> String {
    format_list("USERS", "No users found.", users, format_user_hit)
}

pub fn format_user_orgs(orgs: &[UserOrg]) -> String {
    format_list("ORGANIZATIONS", "No organizations found.", orgs, |org| {
        format!("{}\n  ID: {}\n  Role: {}", org.name, org.org_id, org.role)
    })
}

/// Format a team for display.
pub fn format_team(team: &Team) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  Members: {}",
        team.name, team.id, team.member_count
    );
    if !team.email.is_empty() {
        output.push_str(&format!("\n  Email: {}", team.email));
    }
    output
}

/// Format one page of a team search.
pub fn format_teams(page: &TeamSearchPage) -> String {
    let mut output = format_list("TEAMS", "No teams found.", &page.teams, format_team);
    if page.total_count > page.teams.len() as i64 {
        output.push_str(&format!(
            "\nPage {} of {} teams in total",
            page.page, page.total_count
        ));
    }
    output
}

pub fn format_team_members(members: &[TeamMember]) -> String {
    format_list("MEMBERS", "No members found.", members, |member| {
        format!(
            "{}\n  User ID: {}\n  Email: {}",
            member.login, member.user_id, member.email
        )
    })
}

/// Format an organization for display.
pub fn format_org(org: &Org) -> String {
    let mut output = format!("{}\n  ID: {}", org.name, org.id);
    let address = &org.address;
    let lines: Vec<&str> = [
        address.address1.as_str(),
        address.address2.as_str(),
        address.zip_code.as_str(),
        address.city.as_str(),
        address.state.as_str(),
        address.country.as_str(),
    ]
    .into_iter()
    .filter(|line| !line.is_empty())
    .collect();
    if !lines.is_empty() {
        output.push_str(&format!("\n  Address: {}", lines.join(", ")));
    }
    output
}

pub fn format_orgs(orgs: &[SimpleOrg]) -> String {
    format_list("ORGANIZATIONS", "No organizations found.", orgs, |org| {
        format!("{}\n  ID: {}", org.name, org.id)
    })
}

/// Format a folder for display.
pub fn format_folder(folder: &Folder) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  UID: {}\n  Version: {}",
        folder.title, folder.id, folder.uid, folder.version
    );
    if !folder.url.is_empty() {
        output.push_str(&format!("\n  URL: {}", folder.url));
    }
    output
}

pub fn format_folders(folders: &[SimpleFolder]) -> String {
    format_list("FOLDERS", "No folders found.", folders, |folder| {
        format!("{}\n  ID: {}\n  UID: {}", folder.title, folder.id, folder.uid)
    })
}

/// Format a data source for display.
pub fn format_datasource(datasource: &DataSource) -> String {
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  UID: {}\n  URL: {}\n  Access: {}",
        datasource.name,
        datasource.kind,
        datasource.id,
        datasource.uid,
        datasource.url,
        datasource.access
    );
    if datasource.is_default {
        output.push_str("\n  Default");
    }
    output
}

pub fn format_datasources(datasources: &[DataSource]) -> String {
    format_list(
        "DATA SOURCES",
        "No data sources found.",
        datasources,
        format_datasource,
    )
}

pub fn format_keys(keys: &[ApiKey]) -> String {
    format_list("API KEYS", "No API keys found.", keys, |key| {
        format!("{}\n  ID: {}\n  Role: {}", key.name, key.id, key.role)
    })
}

/// The secret is only shown once, so it is printed in full.
pub fn format_created_key(key: &CreatedApiKey) -> String {
    format!("{}\n  Key: {}", key.name, key.key)
}

pub fn format_search_results(results: &[SearchResult]) -> String {
    format_list("RESULTS", "Nothing found.", results, |result| {
        let kind = match result.kind {
            SearchType::Dashboard => "dashboard",
            SearchType::Folder => "folder",
        };
        let mut output = format!(
            "{} [{}]\n  ID: {}\n  UID: {}",
            result.title, kind, result.id, result.uid
        );
        if let Some(folder) = &result.folder_title {
            output.push_str(&format!("\n  Folder: {}", folder));
        }
        if !result.tags.is_empty() {
            output.push_str(&format!("\n  Tags: {}", result.tags.join(", ")));
        }
        output
    })
}

/// Format server statistics for display.
pub fn format_stats(stats: &AdminStats) -> String {
    format!(
        "Grafana stats:\n  Users: {} ({} active)\n  Orgs: {}\n  Dashboards: {}\n  Snapshots: {}\n  Data sources: {}\n  Playlists: {}\n  Alerts: {}",
        stats.users,
        stats.active_users,
        stats.orgs,
        stats.dashboards,
        stats.snapshots,
        stats.datasources,
        stats.playlists,
        stats.alerts
    )
}

pub fn format_alerts(alerts: &[Alert]) -> String {
    format_list("ALERTS", "No alerts found.", alerts, |alert| {
        let mut output = format!(
            "{} [{}]\n  ID: {}\n  Dashboard: {} (panel {})",
            alert.name,
            alert.state.as_str(),
            alert.id,
            alert.dashboard_uid,
            alert.panel_id
        );
        if !alert.execution_error.is_empty() {
            output.push_str(&format!("\n  Error: {}", alert.execution_error));
        }
        output
    })
}
