//! Round and game procedures.
//!
//! These drive the teams' roles in the official order and hand the finished
//! notes to the adjudicator. They hold no state of their own.

use crate::core::{Clues, Code, GameRng, Note, TeamMap, TeamName};
use crate::error::Result;
use crate::game::Game;

use super::config::PlayConfig;
use super::generators::RandomCodes;
use super::team::{Team, TeamContext};

/// Play one round with the given codes and record it.
///
/// 1. Each encryptor gives clues for its team's code
/// 2. Each intercepter guesses the opponent's code from the opponent's clues
/// 3. Each guesser deciphers its own team's clues
/// 4. Codes are revealed and the round is scored
///
/// A team's note records everything about *its* code: its clues, the
/// opponent's interception attempt on it, its own decipher attempt and the
/// code itself.
pub fn play_round(game: &mut Game, teams: &mut TeamMap<Team>, codes: &TeamMap<Code>) -> Result<()> {
    let keyword_counts = TeamMap::new(|team| teams[team].keywords.len());

    let mut clues: TeamMap<Clues> = TeamMap::default();
    for team in TeamName::all() {
        let Team { keywords, encryptor, .. } = &mut teams[team];
        let context = TeamContext::new(team, keywords, keyword_counts[team.opponent()], game);
        clues[team] = encryptor.decide_clues(&codes[team], &context);
    }

    let mut interceptions: TeamMap<Code> = TeamMap::default();
    for team in TeamName::all() {
        let opponent = team.opponent();
        let Team { keywords, intercepter, .. } = &mut teams[team];
        let context = TeamContext::new(team, keywords, keyword_counts[opponent], game);
        interceptions[opponent] = intercepter.intercept_clues(&clues[opponent], &context);
    }

    let mut deciphers: TeamMap<Code> = TeamMap::default();
    for team in TeamName::all() {
        let Team { keywords, guesser, .. } = &mut teams[team];
        let context = TeamContext::new(team, keywords, keyword_counts[team.opponent()], game);
        deciphers[team] = guesser.decipher_clues(&clues[team], &context);
    }

    let notes = clues
        .zip(interceptions)
        .zip(deciphers)
        .map(|team, ((clues, interception), decipher)| Note {
            clues: Some(clues),
            attempted_interception: Some(interception),
            attempted_decipher: Some(decipher),
            correct_code: Some(codes[team].clone()),
        });
    game.record_round(notes)
}

/// Play rounds until the game is over, the codes run out, or `round_limit`
/// rounds have been played by this call.
///
/// Codes are only drawn for rounds that are played, so a game stopped by the
/// round limit can be resumed with the same supplier (`codes.by_ref()`).
///
/// Returns the winner, if the game ended with one.
pub fn play_game(
    game: &mut Game,
    teams: &mut TeamMap<Team>,
    round_codes: impl IntoIterator<Item = TeamMap<Code>>,
    round_limit: Option<u32>,
) -> Result<Option<TeamName>> {
    let mut round_codes = round_codes.into_iter();
    let mut played = 0u32;
    while !game.game_over() && round_limit.map_or(true, |limit| played < limit) {
        let Some(codes) = round_codes.next() else {
            break;
        };
        play_round(game, teams, &codes)?;
        played += 1;
    }

    let winner = game.winner();
    if game.game_over() {
        let data = game.data();
        match winner {
            Some(team) => log::info!("{} wins after {} rounds", team, data.rounds_played),
            None => log::info!("game tied after {} rounds", data.rounds_played),
        }
    }
    Ok(winner)
}

/// Play with randomly dealt codes.
pub fn play_random_game(
    game: &mut Game,
    teams: &mut TeamMap<Team>,
    config: &PlayConfig,
) -> Result<Option<TeamName>> {
    let card_sizes = TeamMap::new(|team| teams[team].keywords.len());
    let codes = RandomCodes::new(card_sizes, config.code_length, GameRng::new(config.seed))?;
    play_game(game, teams, codes, config.round_limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::team::{Encryptor, Guesser, Intercepter, KeywordEncryptor, KeywordGuesser};

    /// Always guesses the same code.
    struct Fixed(Code);

    impl Intercepter for Fixed {
        fn intercept_clues(&mut self, _clues: &Clues, _context: &TeamContext<'_>) -> Code {
            self.0.clone()
        }
    }

    impl Guesser for Fixed {
        fn decipher_clues(&mut self, _clues: &Clues, _context: &TeamContext<'_>) -> Code {
            self.0.clone()
        }
    }

    impl Encryptor for Fixed {
        fn decide_clues(&mut self, code: &Code, _context: &TeamContext<'_>) -> Clues {
            code.iter().map(|d| d.to_string()).collect()
        }
    }

    fn code(digits: [u8; 3]) -> Code {
        digits.into_iter().collect()
    }

    fn words() -> [&'static str; 4] {
        ["a", "b", "c", "d"]
    }

    #[test]
    fn test_round_fills_notes() {
        let mut game = Game::default();
        let mut teams = TeamMap::from_pair(
            Team::new(words(), KeywordEncryptor, Fixed(code([0, 1, 2])), KeywordGuesser),
            Team::new(words(), KeywordEncryptor, Fixed(code([3, 2, 1])), KeywordGuesser),
        );
        let codes = TeamMap::from_pair(code([3, 2, 1]), code([0, 1, 2]));

        play_round(&mut game, &mut teams, &codes).unwrap();

        let notes = game.notesheet()[0].clone();
        let first = &notes[TeamName::First];
        assert_eq!(first.correct_code, Some(code([3, 2, 1])));
        assert_eq!(first.attempted_decipher, Some(code([3, 2, 1])));
        // Second's interception attempt on First's code
        assert_eq!(first.attempted_interception, Some(code([3, 2, 1])));
        assert_eq!(
            first.clues.as_deref(),
            Some(&["d".to_string(), "c".into(), "b".into()][..])
        );

        // round one: interceptions not scored
        assert_eq!(game.data().interceptions, TeamMap::from([0, 0]));
        assert_eq!(game.data().miscommunications, TeamMap::from([0, 0]));
    }

    #[test]
    fn test_interception_credits_intercepting_team() {
        let mut game = Game::default();
        // Second always guesses [3, 2, 1]; First always guesses [0, 0, 0]
        let mut teams = TeamMap::from_pair(
            Team::new(words(), KeywordEncryptor, Fixed(code([0, 0, 0])), KeywordGuesser),
            Team::new(words(), KeywordEncryptor, Fixed(code([3, 2, 1])), KeywordGuesser),
        );
        let codes = TeamMap::from_pair(code([3, 2, 1]), code([0, 1, 2]));

        let winner = play_game(&mut game, &mut teams, std::iter::repeat(codes), None).unwrap();

        // Second intercepts in rounds 2 and 3
        let data = game.data();
        assert_eq!(data.rounds_played, 3);
        assert_eq!(data.interceptions, TeamMap::from([0, 2]));
        assert_eq!(winner, Some(TeamName::Second));
    }

    #[test]
    fn test_miscommunication_ends_game() {
        let mut game = Game::default();
        let mut teams = TeamMap::from_pair(
            Team::new(words(), Fixed(code([0, 0, 0])), Fixed(code([0, 0, 0])), Fixed(code([1, 2, 3]))),
            Team::sandbox(words(), 3),
        );
        let codes = TeamMap::from_pair(code([0, 1, 2]), code([0, 1, 2]));

        let winner = play_game(&mut game, &mut teams, std::iter::repeat(codes), None).unwrap();

        assert_eq!(game.data().miscommunications[TeamName::First], 2);
        assert_eq!(game.data().rounds_played, 2);
        assert_eq!(winner, Some(TeamName::Second));
    }

    #[test]
    fn test_round_limit() {
        let mut game = Game::default();
        let mut teams = TeamMap::from_pair(Team::sandbox(words(), 1), Team::sandbox(words(), 2));
        let codes = TeamMap::from_pair(code([0, 1, 2]), code([0, 1, 2]));

        let winner = play_game(&mut game, &mut teams, std::iter::repeat(codes), Some(1)).unwrap();

        assert_eq!(game.data().rounds_played, 1);
        assert!(!game.game_over());
        assert_eq!(winner, None);
    }

    #[test]
    fn test_codes_run_out() {
        let mut game = Game::default();
        let mut teams = TeamMap::from_pair(Team::sandbox(words(), 1), Team::sandbox(words(), 2));
        let codes = TeamMap::from_pair(code([0, 1, 2]), code([2, 1, 0]));

        play_game(&mut game, &mut teams, vec![codes.clone(), codes], None).unwrap();
        assert_eq!(game.data().rounds_played, 2);
    }

    #[test]
    fn test_random_game_rejects_long_codes() {
        let mut game = Game::default();
        let mut teams = TeamMap::from_pair(Team::sandbox(words(), 1), Team::sandbox(words(), 2));
        let config = PlayConfig::new().with_code_length(5);

        assert!(play_random_game(&mut game, &mut teams, &config).is_err());
        assert_eq!(game.data().rounds_played, 0);
    }
}
