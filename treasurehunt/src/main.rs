use std::{
    fmt,
    io::{self, BufRead, Write},
    process,
};

use clap::{value_t, App, Arg, ArgMatches};
use log::{error, info};
use once_cell::sync::Lazy;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use regex::Regex;

use treasuremap::{board::PlayerLimits, Board, Player, Position, Strategy, Tile};

mod logging;

/// Settings for a session, taken from the command line.
#[derive(Debug)]
struct Config {
    size: usize,
    players: usize,
    strategy: Strategy,
    seed: Option<u64>,
    min_size: usize,
    max_size: usize,
    max_players: usize,
}

impl Config {
    /// Read the config from parsed arguments. Exits with clap's usage message on bad values.
    fn from_matches(matches: &ArgMatches) -> Self {
        let num = |name: &str| value_t!(matches, name, usize).unwrap_or_else(|e| e.exit());
        let strategy = match matches.value_of("map").map(str::to_ascii_lowercase).as_deref() {
            Some("hazardous") => Strategy::Hazardous,
            _ => Strategy::Safe,
        };
        let seed = if matches.is_present("seed") {
            Some(value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit()))
        } else {
            None
        };
        Self {
            size: num("size"),
            players: num("players"),
            strategy,
            seed,
            min_size: num("min_size"),
            max_size: num("max_size"),
            max_players: num("max_players"),
        }
    }

    /// Size rules for the board.
    fn limits(&self) -> PlayerLimits {
        PlayerLimits::new(1..=self.max_players, self.min_size..=self.max_size)
    }
}

fn main() -> io::Result<()> {
    logging::init_logging();
    let matches = App::new("Treasure Hunt")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Find the treasure without falling in the water.")
        .arg(
            Arg::with_name("size")
                .short("s")
                .long("size")
                .value_name("SIZE")
                .help("length of each side of the map")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("players")
                .short("p")
                .long("players")
                .value_name("PLAYERS")
                .help("number of players the map is sized for")
                .takes_value(true)
                .default_value("2"),
        )
        .arg(
            Arg::with_name("map")
                .short("m")
                .long("map")
                .value_name("MAP")
                .help("kind of map to generate")
                .takes_value(true)
                .possible_values(&["hazardous", "safe"])
                .case_insensitive(true)
                .default_value("safe"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .value_name("SEED")
                .help("seed for a reproducible map")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("min_size")
                .long("min-size")
                .value_name("MIN")
                .help("smallest map size allowed")
                .takes_value(true)
                .default_value("5"),
        )
        .arg(
            Arg::with_name("max_size")
                .long("max-size")
                .value_name("MAX")
                .help("largest map size allowed")
                .takes_value(true)
                .default_value("50"),
        )
        .arg(
            Arg::with_name("max_players")
                .long("max-players")
                .value_name("MAX")
                .help("largest number of players allowed")
                .takes_value(true)
                .default_value("8"),
        )
        .get_matches();
    let config = Config::from_matches(&matches);

    let mut board = Board::with_policy(config.strategy, config.limits()).unwrap_or_else(|err| {
        error!("{}", err);
        process::exit(1);
    });
    if let Err(err) = board.try_set_size(config.size, config.size, config.players) {
        error!("{}", err);
        process::exit(2);
    }
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    match board.generate_with(&mut rng) {
        Ok(generated) => info!(
            "generated a {} map with {}% water",
            board.strategy(),
            generated.water_pct
        ),
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }

    let grass: Vec<Position> = board
        .iter_rows()
        .flatten()
        .filter(|&(_, tile)| tile == Tile::Grass)
        .map(|(pos, _)| pos)
        .collect();
    let start = match grass.choose(&mut rng) {
        Some(&start) => start,
        None => {
            error!("the map has no grass to start on");
            process::exit(1);
        }
    };
    let mut player = Player::new(1);
    player.set_position(Some(start));

    let stdin = io::stdin();
    let mut input = InputReader::new(stdin.lock());
    play(&board, &mut player, &mut input)?;

    println!();
    println!("The whole map:");
    show_revealed_board(&board, &player);
    board.teardown();
    Ok(())
}

/// Run the command loop until the player finds the treasure or quits.
fn play(
    board: &Board,
    player: &mut Player,
    input: &mut InputReader<impl BufRead>,
) -> io::Result<()> {
    enum Command {
        Step(i32, i32),
        Goto(Position),
        Start,
        Reset,
        History,
        Show,
        Help,
        Quit,
    }
    /// Matcher for the goto command.
    static GOTO: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"^(?x)(?:goto|go|move)\s+
    (?:(?:to|->)\s+)?
    (?P<x>-?[0-9]+)(?:\s*,\s*|\s+)(?P<y>-?[0-9]+)$",
        )
        .unwrap()
    });

    println!();
    println!("Find the treasure. Type help or ? for commands.");
    loop {
        println!();
        if let Ok(pos) = player.position() {
            println!("You are at {}.", pos);
        }
        let cmd = input.read_input_lower("> ", |input| match input {
            "?" | "help" | "h" => Some(Command::Help),
            "up" | "north" | "u" | "n" => Some(Command::Step(0, -1)),
            "down" | "south" | "d" | "s" => Some(Command::Step(0, 1)),
            "left" | "west" | "l" | "w" => Some(Command::Step(-1, 0)),
            "right" | "east" | "r" | "e" => Some(Command::Step(1, 0)),
            "start" | "back" => Some(Command::Start),
            "reset" => Some(Command::Reset),
            "history" => Some(Command::History),
            "show" | "map" => Some(Command::Show),
            "quit" | "exit" | "q" => Some(Command::Quit),
            other => match GOTO.captures(other) {
                Some(captures) => {
                    let x = captures.name("x").unwrap().as_str().parse();
                    let y = captures.name("y").unwrap().as_str().parse();
                    match (x, y) {
                        (Ok(x), Ok(y)) => Some(Command::Goto(Position::new(x, y))),
                        _ => {
                            println!("Coordinates are too large.");
                            None
                        }
                    }
                }
                None => {
                    println!("Invalid command \"{}\". Use '?' for help", other);
                    None
                }
            },
        })?;

        let target = match cmd {
            Command::Step(dx, dy) => match player.position() {
                Ok(pos) => pos.offset(dx, dy),
                Err(err) => {
                    println!("{}", err);
                    continue;
                }
            },
            Command::Goto(pos) => pos,
            Command::Start => {
                if let Err(err) = player.back_to_start_position() {
                    println!("{}", err);
                }
                continue;
            }
            Command::Reset => {
                match player.reset_initial_position() {
                    Ok(()) => println!("This is your new start position."),
                    Err(err) => println!("{}", err),
                }
                continue;
            }
            Command::History => {
                for (i, pos) in player.history().iter().enumerate() {
                    println!("{:>4}: {}", i, pos);
                }
                continue;
            }
            Command::Show => {
                show_obfuscated_board(board, player);
                continue;
            }
            Command::Help => {
                println!(
                    "Available Commands:
    up, down, left, right   move one tile. Also north, south, west, east.
    goto <x>,<y>            move straight to the given tile.
    start                   go back to your start position.
    reset                   make your current position your start position.
    history                 list every position you have been at.
    show                    print the parts of the map you have seen.
    quit                    give up and reveal the map."
                );
                continue;
            }
            Command::Quit => return Ok(()),
        };

        match board.get_tile(target.x, target.y) {
            Err(err) => println!("You can't go there: {}.", err),
            Ok(tile) => {
                player.set_position(Some(target));
                match tile {
                    Tile::Grass => {}
                    Tile::Water => {
                        println!("Splash! You fell in the water and swim back to the start.");
                        if let Err(err) = player.back_to_start_position() {
                            println!("{}", err);
                        }
                    }
                    Tile::Treasure => {
                        println!("You found the treasure at {}!", target);
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// Display helper for a single tile of the map.
#[derive(Copy, Clone)]
enum MapCell {
    Hidden,
    Player,
    Seen(Tile),
}

impl fmt::Display for MapCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            MapCell::Hidden => "##",
            MapCell::Player => "@",
            MapCell::Seen(Tile::Grass) => "..",
            MapCell::Seen(Tile::Water) => "~~",
            MapCell::Seen(Tile::Treasure) => "$$",
        })
    }
}

/// Print the map showing only the tiles the player has visited.
fn show_obfuscated_board(board: &Board, player: &Player) {
    let current = player.position().ok();
    show_board(
        board.size(),
        board.iter_rows().map(move |row| {
            row.map(move |(pos, tile)| match player.was_visited(board, pos.x, pos.y) {
                _ if Some(pos) == current => MapCell::Player,
                Ok(true) => MapCell::Seen(tile),
                _ => MapCell::Hidden,
            })
        }),
    )
}

/// Print the fully revealed map with the player's position marked.
fn show_revealed_board(board: &Board, player: &Player) {
    let current = player.position().ok();
    show_board(
        board.size(),
        board.iter_rows().map(move |row| {
            row.map(move |(pos, tile)| {
                if Some(pos) == current {
                    MapCell::Player
                } else {
                    MapCell::Seen(tile)
                }
            })
        }),
    )
}

/// Show the board by printing the grid. Takes an iterator over the rows of iterators over
/// the items.
fn show_board(size: usize, rows: impl Iterator<Item = impl Iterator<Item = impl fmt::Display>>) {
    print!("   ");
    for i in 0..size {
        print!("{:^4}", i);
    }
    println!();
    for (i, row) in rows.enumerate() {
        print!("{:>2} ", i);
        for cell in row {
            print!("{:^4}", cell);
        }
        println!();
    }
}

/// Helper to read input from the player.
struct InputReader<B> {
    read: B,
    buf: String,
}

impl<B> InputReader<B> {
    fn new(read: B) -> Self {
        Self {
            read,
            buf: String::new(),
        }
    }
}

impl<B: BufRead> InputReader<B> {
    /// Repeatedly tries to read input until the input checker returns `Some`. Converts
    /// to ascii lower before running the checker.
    fn read_input_lower<F, T>(&mut self, prompt: &str, mut checker: F) -> io::Result<T>
    where
        F: FnMut(&str) -> Option<T>,
    {
        loop {
            print!("{} ", prompt);
            io::stdout().flush()?;
            self.buf.clear();
            if self.read.read_line(&mut self.buf)? == 0 {
                println!();
                process::exit(0);
            }
            self.buf.make_ascii_lowercase();
            if let Some(val) = checker(self.buf.trim()) {
                return Ok(val);
            }
        }
    }
}
