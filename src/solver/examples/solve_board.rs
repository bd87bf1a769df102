use word_hunt::config::SolverConfig;
use word_hunt::game::{GameEngine, Trie};

fn main() -> anyhow::Result<()> {
    // Create a small word list
    let words = vec![
        "cat", "cats", "cast", "coat", "coats", "act", "acts", "oat", "oats", "tao", "sat", "sac",
        "scat", "taco", "tacos", "ascot", "stoa", "moat", "moats", "atom", "atoms", "mast", "most",
        "tom", "toms", "mat", "mats", "map", "maps", "amp", "camp", "camps", "lamp", "lamps",
        "palm", "palms", "pal", "pals", "lap", "laps", "slap", "clasp", "clamp", "clamps",
    ];
    let engine = GameEngine::with_lexicon(Trie::from(words), SolverConfig::default())?;

    // c a t s
    // l m o p
    // a p s c
    // s t a m
    let board = engine.board_from_letters("catslmopapscstam")?;
    println!("Board layout:\n{}", board);

    let solution = engine.solve(&board);
    for (i, group) in solution.chosen_groups().iter().enumerate() {
        let words: Vec<&str> = group.iter().map(|c| c.word.as_str()).collect();
        println!("group {}: {}", i + 1, words.join(", "));
    }

    let stats = solution.chosen_stats();
    println!(
        "\nchose {} of {} words for {} points, {} budget left",
        stats.num_words,
        solution.candidates().len(),
        stats.total_reward,
        solution.remaining_budget()
    );

    for candidate in solution.unchosen_by_length().iter().take(5) {
        println!(
            "skipped {} (complexity {}, reward {})",
            candidate.word, candidate.complexity, candidate.reward
        );
    }

    Ok(())
}
