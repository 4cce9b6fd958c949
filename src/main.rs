use anyhow::{anyhow, Context, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::{fs, fs::File, io, io::BufReader, path::PathBuf, sync::Arc};
use u_ants::aco::{AcoConfig, ColonySearch};
use u_ants::distance::GreatCircle;
use u_ants::geo::{
    load_lines, place_names, read_entries, sample_cities, save_lines, write_route, CachedGeocoder,
    CityFilter, Gazetteer, GeocodeCache,
};
use u_ants::models::City;
use u_ants::telemetry::InfoLogger;

fn cli() -> Command {
    Command::new("u-ants")
        .about("Finds short tours through cities with an ant colony")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("solve")
                .about("Resolves a list of place names and searches a tour through them")
                .arg(
                    arg!(<CITIES> "Path to a file with one place name per line")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--gazetteer <DUMP> "GeoNames dump used to resolve place names")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--suffix [SUFFIX] "Appended to every place name before lookup")
                        .default_value(", UA"),
                )
                .arg(
                    arg!(--cache [CACHE] "Geocoding cache file")
                        .default_value("locations.json")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--config [CONFIG] "Search parameters as a json file")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--cities [NUM] "Number of cities to route through")
                        .default_value("10")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(arg!(--ants [ANTS] "Number of ants").value_parser(clap::value_parser!(usize)))
                .arg(arg!(--alpha [ALPHA] "Evaporation parameter").value_parser(clap::value_parser!(f64)))
                .arg(arg!(--beta [BETA] "Heuristic exponent").value_parser(clap::value_parser!(f64)))
                .arg(arg!(--seed [SEED] "Random seed").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(--batch [BATCH] "Ants building routes in parallel")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(--ordered "Take the first cities instead of a random sample")
                        .action(ArgAction::SetTrue),
                )
                .arg(arg!(--verbose "Log search progress").action(ArgAction::SetTrue)),
        )
        .subcommand(
            Command::new("gazetteer")
                .about("Extracts a city list from a GeoNames dump")
                .arg(arg!(<DUMP> "Path to a GeoNames dump").value_parser(clap::value_parser!(PathBuf)))
                .arg(arg!(<OUTPUT> "Where to write the city list").value_parser(clap::value_parser!(PathBuf)))
                .arg(arg!(--country [CC] "Country code to keep").default_value("UA"))
                .arg(
                    arg!(--"min-population" [POP] "Population threshold")
                        .default_value("20000")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("solve", sub_m)) => solve(sub_m),
        Some(("gazetteer", sub_m)) => gazetteer(sub_m),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(matches: &ArgMatches) -> Result<AcoConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => AcoConfig::default(),
    };
    if let Some(&ants) = matches.get_one::<usize>("ants") {
        config.ants = ants;
    }
    if let Some(&alpha) = matches.get_one::<f64>("alpha") {
        config.alpha = alpha;
    }
    if let Some(&beta) = matches.get_one::<f64>("beta") {
        config.beta = beta;
    }
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }
    if let Some(&batch) = matches.get_one::<usize>("batch") {
        config.batch_size = batch;
    }
    config.validate()?;
    Ok(config)
}

fn solve(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let cities_path = matches.get_one::<PathBuf>("CITIES").unwrap();
    let dump_path = matches.get_one::<PathBuf>("gazetteer").unwrap();
    let suffix = matches.get_one::<String>("suffix").unwrap();
    let cache_path = matches.get_one::<PathBuf>("cache").unwrap();
    let num_cities = *matches.get_one::<usize>("cities").unwrap();
    let randomize = !matches.get_flag("ordered");

    let place_list: Vec<String> = load_lines(cities_path)
        .with_context(|| format!("Failed to read {}", cities_path.display()))?
        .into_iter()
        .map(|name| format!("{}{}", name, suffix))
        .collect();

    let dump = File::open(dump_path)
        .with_context(|| format!("Failed to open {}", dump_path.display()))?;
    let resolver = Gazetteer::from_reader(BufReader::new(dump))?;
    if resolver.is_empty() {
        return Err(anyhow!("No entries in {}", dump_path.display()));
    }
    let verbose = matches.get_flag("verbose");
    if verbose {
        println!("Gazetteer entries: {}", resolver.len());
    }
    let mut geocoder = CachedGeocoder::new(resolver, GeocodeCache::open(cache_path)?);
    let locations = geocoder.load_locations(&place_list);
    geocoder.save()?;
    if locations.is_empty() {
        return Err(anyhow!("None of the places in {} could be resolved", cities_path.display()));
    }

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let coordinates = sample_cities(&locations, num_cities, randomize, &mut rng);
    let cities = City::from_coordinates(&coordinates);

    let mut search = ColonySearch::new(config);
    if verbose {
        let logger: InfoLogger = Arc::new(|msg: &str| println!("{}", msg));
        search = search.with_logger(logger);
    }
    let result = search.run_with_rng(&cities, &GreatCircle, &mut rng)?;

    println!("Num of cities: {}", cities.len());
    println!("Num of ants: {}", search.config().ants);
    println!("\n[Path, distance: {}]", result.distance);
    write_route(&mut io::stdout().lock(), &result.route.coordinates(), &locations)?;
    Ok(())
}

fn gazetteer(matches: &ArgMatches) -> Result<()> {
    let dump_path = matches.get_one::<PathBuf>("DUMP").unwrap();
    let output = matches.get_one::<PathBuf>("OUTPUT").unwrap();
    let country = matches.get_one::<String>("country").unwrap();
    let min_population = *matches.get_one::<u64>("min-population").unwrap();

    let dump = File::open(dump_path)
        .with_context(|| format!("Failed to open {}", dump_path.display()))?;
    let entries = read_entries(BufReader::new(dump))?;
    let filter = CityFilter::default()
        .with_country(country.as_str())
        .with_min_population(min_population);
    let names = place_names(&entries, &filter);
    save_lines(output, &names)?;

    println!(
        "Parsed from: {}\nSaved to: {}\nLoaded cities: {}",
        dump_path.display(),
        output.display(),
        names.len()
    );
    Ok(())
}
