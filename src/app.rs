use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result};
use serde::Serialize;
use serde_json::{json, Value};
use site_cms::config::CmsConfig;
use site_cms::form::{FormData, UploadedFile};
use site_cms::item::{self, CmsContext, ListOptions};
use site_cms::media::{group_by_directory, MediaStore};
use site_cms::resource::ResourceKind;
use site_cms::store::DocumentStore;
use site_cms::user::{self, AdminContext};
use site_cms::{card, settings};
use std::path::{Path, PathBuf};

/// Site CMS - admin tool for a JSON-file backed marketing site
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Config file (default: ~/.site-cms/config.toml)
    #[arg(long, env = "SITE_CMS_CONFIG")]
    pub config: Option<PathBuf>,
    /// Directory holding the JSON documents
    #[arg(long, env = "SITE_CMS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,
    /// Public web root that media paths resolve against
    #[arg(long, env = "SITE_CMS_PUBLIC_DIR")]
    pub public_dir: Option<PathBuf>,
    /// Enable JSON log format
    #[arg(long, env = "SITE_CMS_LOG_JSON", default_value = "false")]
    pub log_json: bool,
    /// Custom log directory (default: ~/.site-cms/logs)
    #[arg(long, env = "SITE_CMS_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Fold command line overrides into the loaded config.
    pub fn apply_to(&self, config: &mut CmsConfig) {
        if let Some(dir) = &self.data_dir {
            config.data_dir.clone_from(dir);
        }
        if let Some(dir) = &self.public_dir {
            config.public_dir.clone_from(dir);
        }
        if self.log_json {
            config.logging.json = true;
        }
        if let Some(dir) = &self.log_dir {
            config.logging.dir = Some(dir.clone());
        }
    }
}

/// Submitted fields for create/edit.
#[derive(clap::Args, Debug, Default)]
pub struct FormArgs {
    /// Form field as key=value; repeat a key for multi-valued fields
    #[arg(short = 'f', long = "field", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,
    /// Upload for a reference field as field=path
    #[arg(long = "file", value_parser = parse_field)]
    pub files: Vec<(String, String)>,
    /// Admin username recorded as the author
    #[arg(long = "as", env = "SITE_CMS_ADMIN")]
    pub admin: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List records of a resource
    List {
        resource: ResourceKind,
        /// Only published records, in display order
        #[arg(long)]
        public: bool,
    },
    /// Show one record by id
    Show { resource: ResourceKind, id: i64 },
    /// Find a published record by slug
    Find { resource: ResourceKind, slug: String },
    /// Create a record
    Create {
        resource: ResourceKind,
        #[command(flatten)]
        form: FormArgs,
    },
    /// Edit a record
    Edit {
        resource: ResourceKind,
        id: i64,
        #[command(flatten)]
        form: FormArgs,
    },
    /// Delete a record
    Delete { resource: ResourceKind, id: i64 },
    /// Dashboard counts
    Stats,
    /// Site settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },
    /// Files under the public directory
    Media {
        #[command(subcommand)]
        action: MediaCommand,
    },
    /// Public profile URL for a business card
    CardUrl { slug: String },
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    Show,
    Update {
        #[arg(short = 'f', long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MediaCommand {
    /// List images, optionally grouped by directory
    Scan {
        #[arg(long)]
        grouped: bool,
    },
    /// Store a file under a directory with a name prefix
    Upload {
        directory: String,
        prefix: String,
        path: PathBuf,
    },
    /// Overwrite an existing file, restoring it if the write fails
    Replace { reference: String, path: PathBuf },
    /// Remove a file
    Delete { reference: String },
}

/// Parse a `key=value` pair. The value may itself contain `=`.
pub fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

async fn build_form(resource: ResourceKind, form: &FormArgs) -> Result<FormData> {
    let mut data = FormData::from_pairs(form.fields.iter().cloned());
    for (field, path) in &form.files {
        let spec = resource
            .schema()
            .field(field)
            .ok_or_else(|| eyre!("{resource} has no field '{field}'"))?;
        let file = UploadedFile::from_path(Path::new(path)).await?;
        data.attach_file(spec.upload_key(), file);
    }
    Ok(data)
}

async fn resolve_admin(store: &DocumentStore, form: &FormArgs) -> Result<Option<AdminContext>> {
    let Some(username) = &form.admin else {
        return Ok(None);
    };
    let admin = user::find_admin(store, username)
        .await?
        .ok_or_else(|| eyre!("Unknown admin '{username}'"))?;
    Ok(Some(admin))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Execute a command and return what should be printed.
pub async fn run(command: Command, config: &CmsConfig) -> Result<Value> {
    let store = DocumentStore::new(&config.data_dir);
    let media = MediaStore::new(&config.public_dir);

    let output = match command {
        Command::List { resource, public } => {
            let options = if public {
                ListOptions::public()
            } else {
                ListOptions::admin()
            };
            to_json(&item::list(&store, resource, options).await?)?
        }
        Command::Show { resource, id } => to_json(&item::get(&store, resource, id).await?)?,
        Command::Find { resource, slug } => {
            to_json(&item::find_published_by_slug(&store, resource, &slug).await?)?
        }
        Command::Create { resource, form } => {
            let data = build_form(resource, &form).await?;
            let admin = resolve_admin(&store, &form).await?;
            let mut ctx = CmsContext::new(&store, &media);
            if let Some(admin) = &admin {
                ctx = ctx.with_admin(admin);
            }
            to_json(&item::create(ctx, resource, &data).await?)?
        }
        Command::Edit { resource, id, form } => {
            let data = build_form(resource, &form).await?;
            let ctx = CmsContext::new(&store, &media);
            to_json(&item::edit(ctx, resource, id, &data).await?)?
        }
        Command::Delete { resource, id } => {
            let ctx = CmsContext::new(&store, &media);
            json!({ "deleted": item::delete(ctx, resource, id).await? })
        }
        Command::Stats => to_json(&item::dashboard_stats(&store).await?)?,
        Command::Settings { action } => match action {
            SettingsCommand::Show => to_json(&settings::load_settings(&store).await?)?,
            SettingsCommand::Update { fields } => {
                let form = FormData::from_pairs(fields);
                to_json(&settings::update_site(&store, &form).await?)?
            }
        },
        Command::Media { action } => run_media(action, &media).await?,
        Command::CardUrl { slug } => Value::from(card::profile_url(&config.base_url, &slug)),
    };
    Ok(output)
}

async fn run_media(action: MediaCommand, media: &MediaStore) -> Result<Value> {
    let output = match action {
        MediaCommand::Scan { grouped } => {
            let files = media.scan().await?;
            if grouped {
                to_json(&group_by_directory(&files))?
            } else {
                to_json(&files)?
            }
        }
        MediaCommand::Upload {
            directory,
            prefix,
            path,
        } => {
            let file = UploadedFile::from_path(&path).await?;
            Value::from(media.store(&file, &directory, &prefix).await?)
        }
        MediaCommand::Replace { reference, path } => {
            let file = UploadedFile::from_path(&path).await?;
            media.replace(&reference, &file).await?;
            json!({ "replaced": reference })
        }
        MediaCommand::Delete { reference } => {
            json!({ "deleted": media.delete(&reference).await? })
        }
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("title=Hello = World"),
            Ok(("title".to_string(), "Hello = World".to_string()))
        );
        assert_eq!(parse_field("image="), Ok(("image".to_string(), String::new())));
        assert!(parse_field("novalue").is_err());
        assert!(parse_field("=x").is_err());
    }

    #[test]
    fn test_parse_create_command() {
        let args = Args::try_parse_from([
            "site-cms",
            "create",
            "service-tags",
            "-f",
            "name=Steel",
            "--file",
            "featuredImage=/tmp/a.png",
        ])
        .unwrap();
        let Command::Create { resource, form } = args.command else {
            panic!("expected create");
        };
        assert_eq!(resource, ResourceKind::ServiceTags);
        assert_eq!(form.fields, vec![("name".to_string(), "Steel".to_string())]);
        assert_eq!(form.files.len(), 1);
    }

    #[test]
    fn test_unknown_resource_rejected() {
        assert!(Args::try_parse_from(["site-cms", "list", "widgets"]).is_err());
    }

    #[test]
    fn test_overrides_apply() {
        let args = Args::try_parse_from([
            "site-cms",
            "--data-dir",
            "/srv/data",
            "--log-json",
            "stats",
        ])
        .unwrap();
        let mut config = CmsConfig::default();
        args.apply_to(&mut config);
        assert_eq!(config.data_dir, PathBuf::from("/srv/data"));
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert!(config.logging.json);
    }

    #[tokio::test]
    async fn test_run_create_then_list() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = CmsConfig {
            data_dir: temp_dir.path().join("data"),
            public_dir: temp_dir.path().join("public"),
            ..CmsConfig::default()
        };

        let create = Command::Create {
            resource: ResourceKind::ProjectTags,
            form: FormArgs {
                fields: vec![("name".to_string(), "Bridges".to_string())],
                ..FormArgs::default()
            },
        };
        let created = run(create, &config).await.unwrap();
        assert_eq!(created["slug"], json!("bridges"));

        let listed = run(
            Command::List {
                resource: ResourceKind::ProjectTags,
                public: false,
            },
            &config,
        )
        .await
        .unwrap();
        assert_eq!(listed.as_array().map(Vec::len), Some(1));
    }

    #[tokio::test]
    async fn test_run_card_url() {
        let config = CmsConfig::default();
        let url = run(Command::CardUrl { slug: "ana".to_string() }, &config)
            .await
            .unwrap();
        assert_eq!(url, json!("http://localhost:4000/card/ana"));
    }
}
