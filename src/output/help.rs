//! Usage text

/// Printed by `help` / `h`
pub const HELP: &str = "\
Record each guess with the feedback the game gave it, then ask for suggestions.

Entering a guess (G = right spot, Y = wrong spot, - = not in word):
  crane G-Y--          word, space, five feedback symbols
  Gc-rYa-n-e           feedback symbol before each letter
  record crane G-Y--   same as above, with an explicit keyword
  (g/y/_ and 🟩/🟨/⬜ are accepted too)

Commands:
  suggest, s           list every word still possible
  suggest vowels, sv   same, words with more distinct vowels first
  undo                 forget the last guess
  show, show state     show the language and recorded guesses
  reset, restart       forget all guesses
  lang en, lang es     switch dictionary language
  help, h              show this text
  quit, exit, q        leave";
