//! Integration tests for the prompt pipeline

use template_cli::cli::{Commands, GlobalArgs, OutputArgs};
use template_cli::error::{CliError, PromptError};
use template_cli::output::OutputKind;
use template_cli::prompt::{Answer, PromptPipeline, PromptStep, ScriptedPrompter};

use super::test_utils::TestEnv;

#[test]
fn test_duplicate_names_keep_second_answer() {
    let pipeline = PromptPipeline::new()
        .step(PromptStep::text("a", "a once", None))
        .step(PromptStep::text("a", "a twice", None))
        .step(PromptStep::confirm("b", "b", None));
    let mut prompter = ScriptedPrompter::new([
        Answer::Text("first".into()),
        Answer::Text("second".into()),
        Answer::Bool(true),
    ]);

    let results = pipeline.run(&mut prompter).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results.text("a").unwrap(), "second");
    assert_eq!(
        results.iter().map(|(name, _)| name).collect::<Vec<_>>(),
        ["a", "b"]
    );
}

#[test]
fn test_typed_access_mismatch() {
    let pipeline = PromptPipeline::new().step(PromptStep::number("n", "Number", None));
    let mut prompter = ScriptedPrompter::new([Answer::Number(4)]);
    let results = pipeline.run(&mut prompter).unwrap();

    assert!(matches!(
        results.flag("n"),
        Err(PromptError::TypeMismatch { .. })
    ));
    assert!(matches!(results.number("x"), Err(PromptError::Missing(_))));
}

#[test]
fn test_bar_command_renders_answers() {
    let env = TestEnv::new();
    let mut prompter = ScriptedPrompter::new([
        Answer::Bool(true),
        Answer::Bool(true),
        Answer::Bool(false),
        Answer::Text("toml".into()),
        Answer::Text("http://localhost".into()),
    ]);

    let out = env
        .run(
            &GlobalArgs::default(),
            Commands::Bar {
                output: OutputArgs {
                    output: Some(OutputKind::Text),
                    query: None,
                },
            },
            &mut prompter,
        )
        .unwrap();

    assert_eq!(
        out,
        format!(
            "{:<20}false\n{:<20}toml\n{:<20}http://localhost\n",
            "confirmation:", "format:", "base-url:"
        )
    );
}

#[test]
fn test_bar_command_abort_renders_nothing() {
    let env = TestEnv::new();
    let mut prompter = ScriptedPrompter::new([Answer::Bool(true)]);

    let result = env.run(
        &GlobalArgs::default(),
        Commands::Bar {
            output: OutputArgs::default(),
        },
        &mut prompter,
    );
    assert!(matches!(result, Err(CliError::Prompt(PromptError::Aborted))));
    assert_eq!(prompter.transcript().len(), 2);
}
