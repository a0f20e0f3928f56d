use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use gqlquery::QueryNode;
use gqlquery::Value;

/// Build and print the full-text-cursor example query through `gqlquery`'s
/// public API.
#[derive(Debug, clap::Args)]
pub(crate) struct DemoCmd {
    #[arg(
        default_value = "id=in=(37318945)",
        help = "RSQL filter the example query passes to fullTextCursor \
               (becomes the default of the $rsql operation variable).",
        long,
    )]
    rsql: String,

    #[arg(
        default_values_t = ["Site".to_string()],
        help = "Entity types the example query searches across (become the \
               default of the $types operation variable).",
        long,
        value_delimiter = ',',
    )]
    types: Vec<String>,

    #[arg(
        help = "Operation name to attach to the printed query.",
        long,
    )]
    operation_name: Option<String>,
}

#[inherent::inherent]
impl RunnableCommand for DemoCmd {
    pub fn run(self, _cli: Cli) -> CommandResult {
        log::debug!(
            "Building the fullTextCursor example query for {} type(s)...",
            self.types.len(),
        );

        let mut query = QueryNode::query()
            .declare_variable_with_default(
                "types",
                "[String!]",
                Value::from(self.types),
            )
            .declare_variable_with_default(
                "rsql",
                "String",
                self.rsql,
            );
        if let Some(operation_name) = self.operation_name {
            query = query.set_name(operation_name);
        }

        let query = query.select_node(
            QueryNode::named("fullTextCursor")
                .add_argument("types", Value::raw("$types"))
                .add_argument("rsql", Value::raw("$rsql"))
                .select_node(
                    QueryNode::named("edges").select_node(
                        QueryNode::named("node")
                            .select_field("id")
                            .select_node(
                                QueryNode::on("Location")
                                    .select_field("name")
                                    .select_node(
                                        QueryNode::named("attachments")
                                            .select_fields([
                                                "name",
                                                "fileName",
                                                "fileExtension",
                                            ]),
                                    ),
                            ),
                    ),
                ),
        );

        match query.build() {
            Ok(document) => CommandResult::stdout(format_args!("{document}")),
            Err(e) => CommandResult::stderr(format_args!(
                "Failed to render the example query: {e}",
            )),
        }
    }
}
