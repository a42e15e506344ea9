use catshelter::application::{
    init::init, CatStore, ConfigService, DashboardService, LoadOrigin,
};
use catshelter::cli::{
    format_breed_list, format_cat_detail, format_cat_list, format_dashboard, format_status_list,
    Cli, Commands,
};
use catshelter::domain::NewCat;
use catshelter::error::{Result, ShelterError};
use catshelter::infrastructure::{Config, FileSystemStorage, ShelterDirectory};
use catshelter::logging::init_logging;
use chrono::Local;
use clap::Parser;

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Discover the shelter, start logging and load the store.
fn open_store() -> Result<(Config, CatStore<FileSystemStorage>)> {
    let shelter = ShelterDirectory::discover()?;
    let config = shelter.load_config()?;

    if let Err(e) = init_logging(&config.get_log_level(), &shelter.log_dir()) {
        eprintln!("Warning: {}", e);
    }

    let mut store = CatStore::load_with_key(shelter.storage(), config.storage_key.clone());
    if store.origin().is_seeded() {
        log::info!(
            "event=store_open module=cli status=seeded origin={:?}",
            store.origin()
        );
    }

    // Seed ids are minted per load; keep them once nothing was stored yet.
    // A corrupt payload is left in place for inspection.
    if store.origin() == &LoadOrigin::SeededMissing {
        if let Some(e) = store.save().persist_error() {
            eprintln!("Warning: seed records could not be saved: {}", e);
        }
    }
    Ok((config, store))
}

fn run(cli: Cli) -> Result<()> {
    let today = Local::now().date_naive();

    match cli.command {
        Some(Commands::Init { path }) => {
            init(&path)?;
            println!("Initialized catshelter at {}", path.display());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(ShelterDirectory::discover()?);

            if list {
                let config = service.list()?;
                println!("storage_key = {}", config.storage_key);
                println!("log_level = {}", config.log_level);
                println!("recent_intake_days = {}", config.recent_intake_days);
                println!("recent_cats_limit = {}", config.recent_cats_limit);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: catshelter config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: storage_key, log_level, recent_intake_days, recent_cats_limit, created"
                );
                Ok(())
            }
        }
        Some(Commands::List(args)) => {
            let filter = args.to_filter()?;
            let (_, store) = open_store()?;
            let cats = store.list(Some(&filter));

            if args.json {
                println!("{}", serde_json::to_string_pretty(&cats)?);
            } else {
                println!("{}", format_cat_list(&cats).trim_end());
            }
            Ok(())
        }
        Some(Commands::Show { id, json }) => {
            let (_, store) = open_store()?;
            let cat = store
                .get_by_id(&id)
                .ok_or_else(|| ShelterError::CatNotFound(id.clone()))?;

            if json {
                println!("{}", serde_json::to_string_pretty(cat)?);
            } else {
                print!("{}", format_cat_detail(cat));
            }
            Ok(())
        }
        Some(Commands::Add(args)) => {
            let new_cat = args.to_new_cat(today)?;
            new_cat.validate().map_err(ShelterError::Validation)?;

            let (_, mut store) = open_store()?;
            let (cat, persist_error) = store.create(new_cat).into_parts();
            println!("Added {} ({})", cat.name, cat.id);
            persist_error.map_or(Ok(()), |e| Err(e.into()))
        }
        Some(Commands::Edit(args)) => {
            let changes = args.to_update()?;
            let (_, mut store) = open_store()?;

            let mut preview = store
                .get_by_id(&args.id)
                .cloned()
                .ok_or_else(|| ShelterError::CatNotFound(args.id.clone()))?;
            changes.apply_to(&mut preview);
            NewCat::from(&preview)
                .validate()
                .map_err(ShelterError::Validation)?;

            let (updated, persist_error) = store.update(&args.id, &changes).into_parts();
            let cat = updated.ok_or_else(|| ShelterError::CatNotFound(args.id.clone()))?;
            println!("Updated {} ({})", cat.name, cat.id);
            persist_error.map_or(Ok(()), |e| Err(e.into()))
        }
        Some(Commands::Delete { id }) => {
            let (_, mut store) = open_store()?;
            let (deleted, persist_error) = store.delete(&id).into_parts();
            if !deleted {
                return Err(ShelterError::CatNotFound(id));
            }
            println!("Deleted {}", id);
            persist_error.map_or(Ok(()), |e| Err(e.into()))
        }
        Some(Commands::Breeds) => {
            let (_, store) = open_store()?;
            println!("{}", format_breed_list(&store.list_breeds()).trim_end());
            Ok(())
        }
        Some(Commands::Statuses) => {
            print!(
                "{}",
                format_status_list(CatStore::<FileSystemStorage>::list_adoption_statuses())
            );
            Ok(())
        }
        Some(Commands::Dashboard { json }) => {
            let (config, store) = open_store()?;
            let summary = DashboardService::new(&store, &config).summary(today);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", format_dashboard(&summary));
            }
            Ok(())
        }
        None => {
            println!("catshelter - Cat shelter records");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
