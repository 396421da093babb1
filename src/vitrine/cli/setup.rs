use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use vitrine::filter::Choice;
use vitrine::model::{
    CertificationCategory, CertificationStatus, PostCategory, ProjectCategory, SkillCategory,
};

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

const ABOUT: &str = "Portfolio catalog: projects, posts and certifications from the command line";

#[derive(Parser, Debug)]
#[command(
    name = "vitrine",
    bin_name = "vitrine",
    version = get_version(),
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = ABOUT, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// The collection a per-item command works on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CollectionArg {
    Projects,
    Posts,
    Certs,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Browse,
    Manage,
    Inbox,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Browse => "Browse:",
            CommandGroup::Manage => "Manage:",
            CommandGroup::Inbox => "Contact:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    /// Returns the group for a given command name
    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "projects" | "posts" | "certs" | "experience" | "skills" | "view" | "chat" => {
                Some(CommandGroup::Browse)
            }
            "add-project" | "update-project" | "feature" | "unfeature" | "publish"
            | "unpublish" | "delete" | "add-experience" | "add-skill" => {
                Some(CommandGroup::Manage)
            }
            "contact" | "inbox" | "mark-read" => Some(CommandGroup::Inbox),
            "stats" | "config" | "init" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Browse,
            CommandGroup::Manage,
            CommandGroup::Inbox,
            CommandGroup::Misc,
        ]
    }
}

/// Returns the custom grouped help output as a string
pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("vitrine {version}\n"));
    output.push_str(ABOUT);
    output.push_str("\n\n");
    output.push_str("Usage: vitrine [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();

    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let name = sc.get_name();
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<15} {}\n", name, about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("  -v, --verbose    Verbose output\n");
    output.push_str("      --no-color   Disable colored output\n");
    output.push_str("  -h, --help       Print help\n");
    output.push_str("  -V, --version    Print version\n");
    output.push('\n');
    output.push_str("Set VITRINE_HOME to keep the catalog somewhere other than the default data dir.\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

/// Prints help for a command by name, falling back to the grouped help
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();

    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            let help = subcmd.render_help();
            print!("{}", help);
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

/// Prints help for the parsed subcommand using clap's built-in rendering
pub fn print_subcommand_help(command: &Option<Commands>) {
    let name = match command {
        Some(Commands::Browse(c)) => match c {
            BrowseCommands::Projects { .. } => "projects",
            BrowseCommands::Posts { .. } => "posts",
            BrowseCommands::Certs { .. } => "certs",
            BrowseCommands::Experience => "experience",
            BrowseCommands::Skills { .. } => "skills",
            BrowseCommands::View { .. } => "view",
            BrowseCommands::Chat { .. } => "chat",
        },
        Some(Commands::Manage(c)) => match c {
            ManageCommands::AddProject { .. } => "add-project",
            ManageCommands::UpdateProject { .. } => "update-project",
            ManageCommands::Feature { .. } => "feature",
            ManageCommands::Unfeature { .. } => "unfeature",
            ManageCommands::Publish { .. } => "publish",
            ManageCommands::Unpublish { .. } => "unpublish",
            ManageCommands::Delete { .. } => "delete",
            ManageCommands::AddExperience { .. } => "add-experience",
            ManageCommands::AddSkill { .. } => "add-skill",
        },
        Some(Commands::Inbox(c)) => match c {
            InboxCommands::Contact { .. } => "contact",
            InboxCommands::Inbox { .. } => "inbox",
            InboxCommands::MarkRead { .. } => "mark-read",
        },
        Some(Commands::Misc(c)) => match c {
            MiscCommands::Stats => "stats",
            MiscCommands::Config { .. } => "config",
            MiscCommands::Init { .. } => "init",
            MiscCommands::Help { .. } => "help",
        },
        None => {
            print_grouped_help();
            return;
        }
    };

    print_help_for_command(name);
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Browse(BrowseCommands),

    #[command(flatten)]
    Manage(ManageCommands),

    #[command(flatten)]
    Inbox(InboxCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum BrowseCommands {
    /// List projects
    #[command(alias = "p", display_order = 1)]
    Projects {
        /// Search titles, descriptions and technologies
        #[arg(short, long)]
        search: Option<String>,

        /// frontend, backend, fullstack or all
        #[arg(short, long, default_value = "all")]
        category: Choice<ProjectCategory>,

        /// Include unpublished projects
        #[arg(long)]
        drafts: bool,

        /// Only featured projects
        #[arg(long)]
        featured: bool,
    },

    /// List blog posts
    #[command(alias = "b", display_order = 2)]
    Posts {
        /// Search titles, excerpts and tags
        #[arg(short, long)]
        search: Option<String>,

        /// Frontend, Backend, CSS, Performance, Design, Carreira or all
        #[arg(short, long, default_value = "all")]
        category: Choice<PostCategory>,

        /// Only posts carrying this exact tag
        #[arg(short, long)]
        tag: Option<String>,
    },

    /// List certifications
    #[command(alias = "c", display_order = 3)]
    Certs {
        /// Search titles, issuers, descriptions and skills
        #[arg(short, long)]
        search: Option<String>,

        /// frontend, backend, fullstack, design, other or all
        #[arg(short, long, default_value = "all")]
        category: Choice<CertificationCategory>,

        /// completed, in-progress, expired or all
        #[arg(long, default_value = "all")]
        status: Choice<CertificationStatus>,
    },

    /// Work history, current position first
    #[command(alias = "xp", display_order = 4)]
    Experience,

    /// Skills by category, strongest first
    #[command(display_order = 5)]
    Skills {
        /// frontend, backend, database, tools, other or all
        #[arg(short, long, default_value = "all")]
        category: Choice<SkillCategory>,
    },

    /// Show one or more items in full
    #[command(alias = "v", display_order = 6)]
    View {
        #[arg(value_enum)]
        collection: CollectionArg,

        /// Indexes of the items (e.g. f1 2 3-5 id:<id>)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Ask the portfolio assistant a question
    #[command(display_order = 7)]
    Chat {
        /// The message (words are joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        words: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ManageCommands {
    /// Add a project
    #[command(display_order = 10)]
    AddProject {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        /// frontend, backend or fullstack
        #[arg(short, long)]
        category: ProjectCategory,

        /// Technology used (repeatable)
        #[arg(long = "tech")]
        technologies: Vec<String>,

        /// List it in the featured section
        #[arg(long)]
        featured: bool,

        /// Keep it out of public listings until published
        #[arg(long)]
        draft: bool,

        #[arg(long)]
        github: Option<String>,

        #[arg(long)]
        live: Option<String>,
    },

    /// Change fields of a project (an empty value clears optional fields)
    #[command(display_order = 11)]
    UpdateProject {
        /// Index of the project (e.g. f1, 2, id:<id>)
        index: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        long_description: Option<String>,

        #[arg(short, long)]
        category: Option<ProjectCategory>,

        /// Replaces the technology list (repeatable)
        #[arg(long = "tech")]
        technologies: Vec<String>,

        #[arg(long)]
        github: Option<String>,

        #[arg(long)]
        live: Option<String>,
    },

    /// Move items into the featured section
    #[command(display_order = 12)]
    Feature {
        #[arg(value_enum)]
        collection: CollectionArg,

        /// Indexes of the items (e.g. 1 3-5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Move items out of the featured section
    #[command(display_order = 13)]
    Unfeature {
        #[arg(value_enum)]
        collection: CollectionArg,

        /// Indexes of the items (e.g. f1 f2)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Publish draft projects
    #[command(display_order = 14)]
    Publish {
        /// Indexes of the projects (e.g. 4 id:<id>)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Turn projects back into drafts
    #[command(display_order = 15)]
    Unpublish {
        /// Indexes of the projects (e.g. 1 f2)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Delete items
    #[command(alias = "rm", display_order = 16)]
    Delete {
        #[arg(value_enum)]
        collection: CollectionArg,

        /// Indexes of the items (e.g. 1 3-5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Add a position to the work history
    #[command(display_order = 17)]
    AddExperience {
        #[arg(long)]
        title: String,

        #[arg(long)]
        company: String,

        #[arg(long, default_value = "")]
        location: String,

        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Last day (YYYY-MM-DD), omitted for the current position
        #[arg(long, conflicts_with = "current")]
        end: Option<NaiveDate>,

        /// Still in this position
        #[arg(long)]
        current: bool,

        #[arg(long, default_value = "")]
        description: String,

        /// Technology used (repeatable)
        #[arg(long = "tech")]
        technologies: Vec<String>,
    },

    /// Add a skill
    #[command(display_order = 18)]
    AddSkill {
        #[arg(long)]
        name: String,

        /// 0 to 100
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
        level: u8,

        /// frontend, backend, database, tools or other
        #[arg(short, long)]
        category: SkillCategory,
    },
}

#[derive(Subcommand, Debug)]
pub enum InboxCommands {
    /// Leave a message through the contact form
    #[command(display_order = 20)]
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,
    },

    /// List received messages, newest first
    #[command(display_order = 21)]
    Inbox {
        /// Only unread messages
        #[arg(long)]
        unread: bool,
    },

    /// Mark messages as read
    #[command(display_order = 22)]
    MarkRead {
        /// Message ids, as shown by `vitrine inbox`
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Catalog summary
    #[command(display_order = 30)]
    Stats,

    /// Get or set configuration
    #[command(display_order = 31)]
    Config {
        /// Configuration key (date-format, line-width, show-drafts)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Write the sample catalog
    #[command(display_order = 32)]
    Init {
        /// Replace an existing catalog
        #[arg(long)]
        force: bool,
    },

    /// Print help for vitrine or a subcommand
    #[command(display_order = 33)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("vitrine").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn category_defaults_to_all() {
        let cli = parse(&["projects"]).unwrap();
        match cli.command {
            Some(Commands::Browse(BrowseCommands::Projects { category, .. })) => {
                assert_eq!(category, Choice::All)
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn category_parses_case_insensitively() {
        let cli = parse(&["certs", "-c", "Frontend", "--status", "in-progress"]).unwrap();
        match cli.command {
            Some(Commands::Browse(BrowseCommands::Certs {
                category, status, ..
            })) => {
                assert_eq!(category, Choice::Only(CertificationCategory::Frontend));
                assert_eq!(status, Choice::Only(CertificationStatus::InProgress));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn unknown_category_is_a_usage_error() {
        assert!(parse(&["projects", "-c", "mobile"]).is_err());
        assert!(parse(&["posts", "--category", "gardening"]).is_err());
    }

    #[test]
    fn item_commands_take_a_collection() {
        let cli = parse(&["feature", "certs", "1", "3-4"]).unwrap();
        match cli.command {
            Some(Commands::Manage(ManageCommands::Feature {
                collection,
                indexes,
            })) => {
                assert_eq!(collection, CollectionArg::Certs);
                assert_eq!(indexes, vec!["1", "3-4"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(parse(&["feature", "pads", "1"]).is_err());
    }

    #[test]
    fn repeated_tech_flags_collect() {
        let cli = parse(&[
            "add-project",
            "--title",
            "Api",
            "--description",
            "Service",
            "-c",
            "backend",
            "--tech",
            "Rust",
            "--tech",
            "Postgres",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Manage(ManageCommands::AddProject { technologies, .. })) => {
                assert_eq!(technologies, vec!["Rust", "Postgres"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn add_experience_parses_dates() {
        let cli = parse(&[
            "add-experience",
            "--title",
            "Developer",
            "--company",
            "Acme",
            "--start",
            "2021-03-01",
            "--end",
            "2022-06-30",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Manage(ManageCommands::AddExperience {
                start, end, current, ..
            })) => {
                assert_eq!(start, NaiveDate::from_ymd_opt(2021, 3, 1).unwrap());
                assert_eq!(end, NaiveDate::from_ymd_opt(2022, 6, 30));
                assert!(!current);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let base = ["add-experience", "--title", "Dev", "--company", "Acme"];
        let with = |extra: &[&'static str]| {
            let mut args = base.to_vec();
            args.extend_from_slice(extra);
            parse(&args)
        };
        assert!(with(&["--start", "March 2021"]).is_err());
        assert!(with(&["--start", "2021-03-01", "--end", "2022-01-01", "--current"]).is_err());
    }

    #[test]
    fn skill_level_is_bounded() {
        let skill = |level: &str, category: &str| {
            parse(&["add-skill", "--name", "Rust", "--level", level, "-c", category])
        };
        assert!(skill("100", "backend").is_ok());
        assert!(skill("101", "backend").is_err());
        assert!(skill("90", "design").is_err());
    }

    #[test]
    fn projects_featured_flag() {
        let cli = parse(&["projects", "--featured"]).unwrap();
        match cli.command {
            Some(Commands::Browse(BrowseCommands::Projects { featured, .. })) => assert!(featured),
            other => panic!("unexpected command: {:?}", other),
        }
        let cli = parse(&["skills", "-c", "TOOLS"]).unwrap();
        match cli.command {
            Some(Commands::Browse(BrowseCommands::Skills { category })) => {
                assert_eq!(category, Choice::Only(SkillCategory::Tools))
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn grouped_help_lists_every_visible_command() {
        let help = get_grouped_help();
        for name in [
            "projects",
            "experience",
            "skills",
            "add-project",
            "add-experience",
            "add-skill",
            "mark-read",
            "stats",
        ] {
            assert!(help.contains(name), "missing {} in help", name);
        }
        assert!(help.contains("Browse:"));
    }
}
