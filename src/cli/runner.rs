use crate::{
    cli::{display::render_tree, Cli, Commands, GlobalArgs, NewArgs},
    config::Settings,
    constants::BUNDLED_TEMPLATES_DIR,
    error::{Error, Result},
    manager::ProjectItemTemplateManager,
    prompt::{input_item_name, select_template},
    template::{OverwriteMode, ProjectItemTemplate, RunOptions},
};
use std::path::PathBuf;

/// Builds the manager from the command line and settings and runs commands on it.
pub struct Runner {
    global: GlobalArgs,
}

impl Runner {
    pub fn new(global: GlobalArgs) -> Self {
        Self { global }
    }

    /// Prints the template tree.
    pub fn list(&self) -> Result<()> {
        let manager = self.load_manager(RunOptions::default())?;
        if manager.root().is_empty() {
            println!("No templates found.");
        } else {
            print!("{}", render_tree(manager.root()));
        }
        Ok(())
    }

    /// Instantiates a template into `args.output_dir`.
    pub fn new_item(&self, args: &NewArgs) -> Result<()> {
        let manager = self.load_manager(Self::run_options(args))?;
        let template = self.pick_template(&manager, args)?;
        let input_name = self.item_name(template, args)?;

        manager.run_template(&args.output_dir, template, &input_name)?;

        if args.dry_run {
            println!("Dry run of '{}' completed, nothing was written.", template.name());
        } else {
            println!(
                "Template '{}' instantiated in {}.",
                template.name(),
                args.output_dir.display()
            );
        }
        Ok(())
    }

    fn run_options(args: &NewArgs) -> RunOptions {
        let overwrite = if args.force {
            OverwriteMode::Overwrite
        } else if args.non_interactive {
            OverwriteMode::Skip
        } else {
            OverwriteMode::Prompt
        };
        RunOptions { dry_run: args.dry_run, overwrite }
    }

    fn workspace_root(&self) -> Result<PathBuf> {
        match &self.global.workspace {
            Some(workspace) => Ok(workspace.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    /// `--bundled-dir`, or `templates` next to the executable.
    fn bundled_dir(&self) -> PathBuf {
        if let Some(dir) = &self.global.bundled_dir {
            return dir.clone();
        }
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(BUNDLED_TEMPLATES_DIR)))
            .unwrap_or_else(|| PathBuf::from(BUNDLED_TEMPLATES_DIR))
    }

    fn load_manager(&self, run_options: RunOptions) -> Result<ProjectItemTemplateManager> {
        let workspace_root = self.workspace_root()?;
        let settings = Settings::load(&workspace_root)?;

        let mut manager = ProjectItemTemplateManager::from_settings(
            self.bundled_dir(),
            &settings,
            Some(workspace_root),
        )
        .with_run_options(run_options);
        for folder in &self.global.templates_dirs {
            manager.register_templates_folder(folder);
        }
        manager.load_templates();
        Ok(manager)
    }

    /// Resolves `--template` as an id first, then as a name; asks when omitted.
    fn pick_template<'m>(
        &self,
        manager: &'m ProjectItemTemplateManager,
        args: &NewArgs,
    ) -> Result<&'m ProjectItemTemplate> {
        if let Some(query) = &args.template {
            let by_id = query.parse::<u32>().ok().and_then(|id| manager.find_template(id));
            return by_id
                .or_else(|| manager.find_template_by_name(query))
                .ok_or_else(|| Error::TemplateNotFound { query: query.clone() });
        }

        let templates: Vec<&ProjectItemTemplate> = manager.root().templates().collect();
        if args.non_interactive || templates.is_empty() {
            return Err(Error::NoTemplateSelected);
        }
        let index = select_template(&templates)?;
        Ok(templates[index])
    }

    fn item_name(&self, template: &ProjectItemTemplate, args: &NewArgs) -> Result<String> {
        if let Some(name) = &args.name {
            return Ok(name.clone());
        }
        if !args.non_interactive {
            return input_item_name(template.default_name());
        }
        template
            .default_name()
            .map(str::to_string)
            .ok_or_else(|| Error::MissingItemName { template: template.name().to_string() })
    }
}

/// Main entry point for CLI execution
pub fn run(cli: Cli) -> Result<()> {
    let runner = Runner::new(cli.global);
    match &cli.command {
        Commands::List => runner.list(),
        Commands::New(args) => runner.new_item(args),
    }
}
