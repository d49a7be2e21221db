use jsoniq_highlight::jsoniq;

pub struct WordsArgs {}

pub fn run(_args: WordsArgs) {
    let classifier = jsoniq().classifier();

    println!("Keywords:");
    for word in classifier.keywords() {
        println!("  {}", word);
    }
    println!();
    println!("Builtins:");
    for word in classifier.builtins() {
        println!("  {}", word);
    }
}
