use anyhow::{Context, Result};
use blocktrail_config::Config;
use blocktrail_engine::{BlockType, Document, Editor, TrailingNodeOptions, with_trailing_node};

/// Build an editor for `document` with the rules and defaults from `config`.
pub fn editor_from_config(config: &Config, document: Document) -> Result<Editor> {
    let default_block_type = config
        .editor
        .default_block_type
        .parse::<BlockType>()
        .context("invalid editor.default_block_type")?;

    let editor = Editor::new(document)
        .with_default_block_type(default_block_type)
        .with_max_passes(config.editor.max_passes);

    Ok(with_trailing_node(editor, trailing_node_options(config)?))
}

pub fn trailing_node_options(config: &Config) -> Result<TrailingNodeOptions> {
    let section = &config.trailing_node;
    let mut options = TrailingNodeOptions::default().with_level(section.level);

    if let Some(key) = &section.default_type {
        let kind = key
            .parse::<BlockType>()
            .context("invalid trailing_node.default_type")?;
        options = options.with_default_type(kind);
    }

    if let Some(keys) = &section.match_types {
        let kinds = keys
            .iter()
            .map(|key| key.parse::<BlockType>())
            .collect::<Result<Vec<_>, _>>()
            .context("invalid trailing_node.match_types")?;
        options = options.with_match_types(kinds);
    }

    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blocktrail_config::{EditorConfig, TrailingNodeConfig};
    use blocktrail_engine::{Node, Path};
    use pretty_assertions::assert_eq;

    fn config(default_block_type: &str, trailing_node: TrailingNodeConfig) -> Config {
        Config {
            editor: EditorConfig {
                default_block_type: default_block_type.to_string(),
                max_passes: 5,
            },
            trailing_node,
        }
    }

    #[test]
    fn test_default_config_builds_paragraph_rule() {
        let mut editor = editor_from_config(&Config::default(), Document::default()).unwrap();

        assert_eq!(editor.plugin_names(), vec!["trailing_node"]);
        editor.normalize_node(&Path::root()).unwrap();
        assert_eq!(
            editor.document().children,
            vec![Node::empty_block(BlockType::Paragraph)]
        );
    }

    #[test]
    fn test_config_values_are_applied() {
        let cfg = config(
            "h2",
            TrailingNodeConfig {
                level: 2,
                default_type: None,
                match_types: Some(vec!["h2".to_string()]),
            },
        );
        let mut editor = editor_from_config(&cfg, Document::default()).unwrap();

        editor.normalize().unwrap();

        assert_eq!(
            editor.document().children,
            vec![
                Node::empty_block(BlockType::H2),
                Node::empty_block(BlockType::H2),
            ]
        );
    }

    #[test]
    fn test_invalid_block_type_is_reported() {
        let cfg = config("paragraph", TrailingNodeConfig::default());
        let err = editor_from_config(&cfg, Document::default()).unwrap_err();
        assert!(err.to_string().contains("editor.default_block_type"));
    }

    #[test]
    fn test_invalid_match_type_is_reported() {
        let cfg = config(
            "p",
            TrailingNodeConfig {
                match_types: Some(vec!["p".to_string(), "h9".to_string()]),
                ..TrailingNodeConfig::default()
            },
        );
        let err = trailing_node_options(&cfg).unwrap_err();
        assert!(err.to_string().contains("trailing_node.match_types"));
    }
}
