use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};
use tracing::debug;

use crate::error::{Error, Result};

/// Extract the password of the `/settings/servers/server` element whose
/// `<id>` matches `server_id`.
///
/// Element names are compared by local name, so both plain files and files
/// carrying the Maven settings namespace
/// (`xmlns="http://maven.apache.org/SETTINGS/1.0.0"`) resolve the same way.
pub fn read_server_token(path: &Path, server_id: &str) -> Result<String> {
    let raw = fs::read_to_string(path).map_err(|source| Error::FileRead {
        path: path.to_owned(),
        source,
    })?;
    let doc = Document::parse(&raw).map_err(|source| Error::XmlParse {
        path: path.to_owned(),
        source,
    })?;

    let server = elements(doc.root_element(), "servers")
        .flat_map(|servers| elements(servers, "server"))
        .find(|server| child_text(*server, "id") == Some(server_id));

    match server {
        Some(server) => {
            let password = child_text(server, "password")
                .filter(|password| !password.is_empty())
                .ok_or_else(|| Error::MissingPassword {
                    server: server_id.to_owned(),
                })?;
            debug!(server = server_id, "found existing token in settings");
            Ok(password.to_owned())
        }
        None => Err(Error::ServerNotFound {
            server: server_id.to_owned(),
            path: path.to_owned(),
        }),
    }
}

fn elements<'a, 'input>(
    parent: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    parent
        .children()
        .filter(move |node| node.is_element() && node.tag_name().name() == name)
}

fn child_text<'a, 'input>(parent: Node<'a, 'input>, name: &str) -> Option<&'a str> {
    parent
        .children()
        .find(|node| node.is_element() && node.tag_name().name() == name)
        .and_then(|node| node.text())
        .map(str::trim)
}
