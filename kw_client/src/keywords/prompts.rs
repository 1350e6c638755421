use indoc::formatdoc;

/// One-shot prompt for keywords in plain text.
pub fn text_prompt(text: &str) -> String {
    formatdoc!(
        "
        Given a prompt, extract software technology keywords and their related programming languages (like python, javascript, java, go, c++) from it and provide a list of answers.

        Example:
        prompt: Learn how to leverage Apache Arrow for blazing fast construction of Neo4j graph projections
        answers: Apache Arrow, Neo4j, Graph Projections

        prompt: {text}
        ",
        text = text.trim()
    )
}

/// One-shot prompt for keywords in the webpage behind a URL.
pub fn url_prompt(url: &str) -> String {
    formatdoc!(
        "
        Given the URL of a webpage, work out what the page covers, then extract software technology keywords and their related programming languages (like python, javascript, java, go, c++) from it and provide a list of answers.

        Example:
        url: https://neo4j.com/docs/graph-data-science/current/installation/
        The page explains how to install the Neo4j Graph Data Science library as a database plugin, run it in a Docker container and connect to it with the Python client.
        answers: Neo4j, Graph Data Science, Docker, Python

        url: {url}
        ",
        url = url
    )
}
