//! # CLI Layer
//!
//! One possible UI client for vitrine. This is the only place that knows about
//! stdout/stderr, parses shell arguments, and formats output for humans.
//!
//! ## Structure
//!
//! - `run()`: parse, build the context, dispatch (called by `main.rs`)
//! - `init_context()`: builds `AppContext` from `VITRINE_HOME` and the stored config
//! - `handle_*()`: per-command handlers that call the API and print rendered output
//!
//! Handlers never carry business logic: filtering, indexing and validation happen in
//! the library, and rendering in `render.rs`.

use super::render::{
    print_messages, render_chat, render_details, render_experiences, render_inbox,
    render_item_list, render_skills, render_stats, render_text_list, Describe, Layout,
};
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, BrowseCommands, Cli,
    CollectionArg, Commands, InboxCommands, ManageCommands, MiscCommands,
};
use clap::Parser;
use std::path::PathBuf;
use vitrine::api::{ConfigAction, VitrineApi};
use vitrine::commands::{
    ContactForm, ListOptions, NewExperience, NewProject, NewSkill, ProjectUpdate,
};
use vitrine::config::VitrineConfig;
use vitrine::error::Result;
use vitrine::filter::{CatalogFilter, Choice};
use vitrine::init::{initialize, HOME_ENV};
use vitrine::model::{
    BlogPost, CatalogItem, Certification, CertificationCategory, CertificationStatus,
    utc_midnight, PostCategory, Project, ProjectCategory, SkillCategory,
};
use vitrine::store::fs::FileStore;

struct AppContext {
    api: VitrineApi<FileStore>,
    config: VitrineConfig,
    layout: Layout,
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    // Top level gets the grouped help, subcommands get clap's own
    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    if let Some(Commands::Misc(MiscCommands::Help { command })) = &cli.command {
        return handle_help(command.clone());
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Browse(cmd)) => match cmd {
            BrowseCommands::Projects {
                search,
                category,
                drafts,
                featured,
            } => handle_projects(&mut ctx, search, category, drafts, featured),
            BrowseCommands::Posts {
                search,
                category,
                tag,
            } => handle_posts(&mut ctx, search, category, tag),
            BrowseCommands::Certs {
                search,
                category,
                status,
            } => handle_certs(&mut ctx, search, category, status),
            BrowseCommands::Experience => handle_experience(&mut ctx),
            BrowseCommands::Skills { category } => handle_skills(&mut ctx, category),
            BrowseCommands::View {
                collection,
                indexes,
            } => handle_view(&mut ctx, collection, indexes),
            BrowseCommands::Chat { words } => handle_chat(&mut ctx, words),
        },
        Some(Commands::Manage(cmd)) => match cmd {
            ManageCommands::AddProject {
                title,
                description,
                category,
                technologies,
                featured,
                draft,
                github,
                live,
            } => {
                let mut input = NewProject::new(title, description, category);
                input.technologies = technologies;
                input.featured = featured;
                input.draft = draft;
                input.github_url = github;
                input.live_url = live;
                handle_add_project(&mut ctx, input)
            }
            ManageCommands::UpdateProject {
                index,
                title,
                description,
                long_description,
                category,
                technologies,
                github,
                live,
            } => {
                let update = ProjectUpdate {
                    title,
                    description,
                    long_description,
                    category,
                    technologies: (!technologies.is_empty()).then_some(technologies),
                    github_url: github,
                    live_url: live,
                };
                handle_update_project(&mut ctx, index, update)
            }
            ManageCommands::Feature {
                collection,
                indexes,
            } => handle_feature(&mut ctx, collection, indexes, true),
            ManageCommands::Unfeature {
                collection,
                indexes,
            } => handle_feature(&mut ctx, collection, indexes, false),
            ManageCommands::Publish { indexes } => handle_publish(&mut ctx, indexes, true),
            ManageCommands::Unpublish { indexes } => handle_publish(&mut ctx, indexes, false),
            ManageCommands::Delete {
                collection,
                indexes,
            } => handle_delete(&mut ctx, collection, indexes),
            ManageCommands::AddExperience {
                title,
                company,
                location,
                start,
                end,
                current,
                description,
                technologies,
            } => {
                let mut input = NewExperience::new(title, company, utc_midnight(start));
                input.location = location;
                input.end_date = end.map(utc_midnight);
                input.current = current;
                input.description = description;
                input.technologies = technologies;
                handle_add_experience(&mut ctx, input)
            }
            ManageCommands::AddSkill {
                name,
                level,
                category,
            } => handle_add_skill(
                &mut ctx,
                NewSkill {
                    name,
                    level,
                    category,
                },
            ),
        },
        Some(Commands::Inbox(cmd)) => match cmd {
            InboxCommands::Contact {
                name,
                email,
                subject,
                message,
            } => handle_contact(
                &mut ctx,
                ContactForm {
                    name,
                    email,
                    subject,
                    message,
                },
            ),
            InboxCommands::Inbox { unread } => handle_inbox(&mut ctx, unread),
            InboxCommands::MarkRead { ids } => handle_mark_read(&mut ctx, ids),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Stats => handle_stats(&mut ctx),
            MiscCommands::Config { key, value } => handle_config(&mut ctx, key, value),
            MiscCommands::Init { force } => handle_init(&mut ctx, force),
            MiscCommands::Help { command } => handle_help(command),
        },
        None => handle_projects(&mut ctx, None, Choice::All, false, false),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = std::env::var_os(HOME_ENV).map(PathBuf::from);
    let ctx = initialize(home)?;
    let layout = Layout::from_config(&ctx.config);

    Ok(AppContext {
        api: ctx.api,
        config: ctx.config,
        layout,
        verbose: cli.verbose,
    })
}

fn show_listing<I: CatalogItem>(
    ctx: &mut AppContext,
    filter: CatalogFilter<I>,
    options: ListOptions,
) -> Result<()> {
    let narrowed = !filter.is_unconstrained() || options.featured_only;
    let result = ctx.api.list::<I>(&filter, options)?;
    let output = render_item_list(
        &result.listed_items,
        result.total_items,
        narrowed,
        &ctx.layout,
    );
    print!("{}", output);
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_projects(
    ctx: &mut AppContext,
    search: Option<String>,
    category: Choice<ProjectCategory>,
    drafts: bool,
    featured_only: bool,
) -> Result<()> {
    let filter = CatalogFilter::<Project>::all()
        .with_search(search.unwrap_or_default())
        .with_category(category);
    let options = ListOptions {
        include_drafts: drafts || ctx.config.show_drafts,
        featured_only,
    };
    show_listing(ctx, filter, options)
}

fn handle_posts(
    ctx: &mut AppContext,
    search: Option<String>,
    category: Choice<PostCategory>,
    tag: Option<String>,
) -> Result<()> {
    let filter = CatalogFilter::<BlogPost>::all()
        .with_search(search.unwrap_or_default())
        .with_category(category)
        .with_tag(tag);
    show_listing(ctx, filter, ListOptions::default())
}

fn handle_certs(
    ctx: &mut AppContext,
    search: Option<String>,
    category: Choice<CertificationCategory>,
    status: Choice<CertificationStatus>,
) -> Result<()> {
    let filter = CatalogFilter::<Certification>::all()
        .with_search(search.unwrap_or_default())
        .with_category(category)
        .with_status(status);
    show_listing(ctx, filter, ListOptions::default())
}

fn handle_experience(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.experiences()?;
    print!("{}", render_experiences(&result.experiences, &ctx.layout));
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_skills(ctx: &mut AppContext, category: Choice<SkillCategory>) -> Result<()> {
    let result = ctx.api.skills(category)?;
    print!("{}", render_skills(&result.skills));
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn view_items<I: Describe>(ctx: &mut AppContext, indexes: &[String]) -> Result<()> {
    let result = ctx.api.view::<I, _>(indexes)?;
    print!("{}", render_details(&result.listed_items, &ctx.layout));
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_view(
    ctx: &mut AppContext,
    collection: CollectionArg,
    indexes: Vec<String>,
) -> Result<()> {
    match collection {
        CollectionArg::Projects => view_items::<Project>(ctx, &indexes),
        CollectionArg::Posts => view_items::<BlogPost>(ctx, &indexes),
        CollectionArg::Certs => view_items::<Certification>(ctx, &indexes),
    }
}

fn feature_items<I: CatalogItem>(
    ctx: &mut AppContext,
    indexes: &[String],
    featured: bool,
) -> Result<()> {
    let result = if featured {
        ctx.api.feature::<I, _>(indexes)?
    } else {
        ctx.api.unfeature::<I, _>(indexes)?
    };
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_feature(
    ctx: &mut AppContext,
    collection: CollectionArg,
    indexes: Vec<String>,
    featured: bool,
) -> Result<()> {
    match collection {
        CollectionArg::Projects => feature_items::<Project>(ctx, &indexes, featured),
        CollectionArg::Posts => feature_items::<BlogPost>(ctx, &indexes, featured),
        CollectionArg::Certs => feature_items::<Certification>(ctx, &indexes, featured),
    }
}

fn delete_items<I: CatalogItem>(ctx: &mut AppContext, indexes: &[String]) -> Result<()> {
    let result = ctx.api.delete::<I, _>(indexes)?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_delete(
    ctx: &mut AppContext,
    collection: CollectionArg,
    indexes: Vec<String>,
) -> Result<()> {
    match collection {
        CollectionArg::Projects => delete_items::<Project>(ctx, &indexes),
        CollectionArg::Posts => delete_items::<BlogPost>(ctx, &indexes),
        CollectionArg::Certs => delete_items::<Certification>(ctx, &indexes),
    }
}

fn handle_publish(ctx: &mut AppContext, indexes: Vec<String>, publish: bool) -> Result<()> {
    let result = if publish {
        ctx.api.publish(&indexes)?
    } else {
        ctx.api.unpublish(&indexes)?
    };
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_add_project(ctx: &mut AppContext, input: NewProject) -> Result<()> {
    let result = ctx.api.create_project(input)?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_update_project(
    ctx: &mut AppContext,
    index: String,
    update: ProjectUpdate,
) -> Result<()> {
    let result = ctx.api.update_project(&index, &update)?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_add_experience(ctx: &mut AppContext, input: NewExperience) -> Result<()> {
    let result = ctx.api.add_experience(input)?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_add_skill(ctx: &mut AppContext, input: NewSkill) -> Result<()> {
    let result = ctx.api.add_skill(input)?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_contact(ctx: &mut AppContext, form: ContactForm) -> Result<()> {
    let result = ctx.api.submit_contact(form)?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_inbox(ctx: &mut AppContext, unread_only: bool) -> Result<()> {
    let result = ctx.api.inbox(unread_only)?;
    print!("{}", render_inbox(&result.contacts, &ctx.layout));
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_mark_read(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.mark_read(&ids)?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_stats(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.stats()?;
    if let Some(stats) = &result.stats {
        print!("{}", render_stats(stats));
    }
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_chat(ctx: &mut AppContext, words: Vec<String>) -> Result<()> {
    let result = ctx.api.chat(&words.join(" "))?;
    if let Some(reply) = &result.reply {
        print!("{}", render_chat(reply, ctx.verbose));
    }
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;

    if show_all {
        let lines: Vec<String> = result
            .config
            .iter()
            .flat_map(|config| config.list_all())
            .map(|(k, v)| format!("{} = {}", k, v))
            .collect();
        print!("{}", render_text_list(&lines, "No configuration values."));
    }
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_init(ctx: &mut AppContext, force: bool) -> Result<()> {
    let result = ctx.api.init(force)?;
    print_messages(&result.messages, ctx.verbose);
    Ok(())
}

fn handle_help(command: Option<String>) -> Result<()> {
    match command {
        Some(name) => print_help_for_command(&name),
        None => print_grouped_help(),
    }
    Ok(())
}
