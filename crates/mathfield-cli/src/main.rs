use anyhow::Context;
use clap::{Parser, Subcommand};
use mathfield_semantics::{
    Annotations, ExpressionTree, NodeId, SemanticTokenizer, TokenizerOptions, TokenizerResult,
};
use mathfield_syntax::{MathTree, TreeBuilder};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mathfield")]
#[command(about = "Semantic tokenizer for math field expressions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Type an expression, tokenize it and emit JSON
    Tokenize {
        /// Glyphs to type, e.g. `obj.x+"label"`
        #[arg(value_name = "TEXT")]
        text: String,
        /// JSON file with tokenizer options
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
        /// Wrap the expression in a unit brace
        #[arg(long)]
        unit_brace: bool,
    },
    /// Print the LaTeX of a typed expression
    Latex {
        #[arg(value_name = "TEXT")]
        text: String,
    },
}

#[derive(Debug, Serialize)]
struct Report {
    latex: String,
    identifiers: TokenizerResult,
    annotations: Vec<AnnotatedNode>,
}

#[derive(Debug, Serialize)]
struct AnnotatedNode {
    id: NodeId,
    glyph: String,
    classes: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Tokenize {
            text,
            config,
            unit_brace,
        } => {
            let options = match config {
                Some(path) => load_options(path)?,
                None => TokenizerOptions::default(),
            };
            let tree = build_tree(text, *unit_brace)?;
            let report = tokenize(&tree, options);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Latex { text } => {
            let tree = build_tree(text, false)?;
            println!("{}", tree.latex());
        }
    }
    Ok(())
}

fn load_options(path: &Path) -> anyhow::Result<TokenizerOptions> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read options from {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid tokenizer options in {}", path.display()))
}

fn build_tree(text: &str, unit_brace: bool) -> anyhow::Result<MathTree> {
    let mut builder = TreeBuilder::new();
    if unit_brace {
        builder.bracket('{', '}', |b| {
            b.typed(text);
        });
    } else {
        builder.typed(text);
    }
    builder
        .finish()
        .with_context(|| format!("cannot build an expression from {:?}", text))
}

fn tokenize(tree: &MathTree, options: TokenizerOptions) -> Report {
    let root = tree.syntax();
    let tokenizer = SemanticTokenizer::new(options);
    let mut annotations = Annotations::new();
    let identifiers = tokenizer.tokenize(&root, &mut annotations);

    let prefix = &tokenizer.options().class_prefix;
    let mut nodes = Vec::new();
    root.post_order(&mut |node| {
        let view = root.view(node);
        let tags = annotations.tags(view.id);
        if !tags.is_empty() {
            nodes.push(AnnotatedNode {
                id: view.id,
                glyph: view.glyph,
                classes: tags.class_names(prefix),
            });
        }
    });
    log::info!(
        "{} identifier(s), {} annotated node(s)",
        identifiers.len(),
        nodes.len()
    );

    Report {
        latex: tree.latex(),
        identifiers,
        annotations: nodes,
    }
}
