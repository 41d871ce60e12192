use clap::Parser;
use miette::IntoDiagnostic;
use smol_str::SmolStr;
use tomo_oauth::{
    BodyOptions, ClientAssertionOptions, build_token_request, create_client_assertion,
    token_endpoint,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Sign a private_key_jwt client assertion for the Tomo token endpoint")]
struct Args {
    /// OAuth client id (becomes `iss` and `sub`)
    #[arg(long, env = "TOMO_CLIENT_ID")]
    client_id: SmolStr,

    /// base64url-encoded private JWK (EC P-256)
    #[arg(long, env = "TOMO_SECRET_KEY", hide_env_values = true)]
    secret_key: SmolStr,

    /// Authorization server origin (e.g. https://auth.tomopayment.com)
    #[arg(long, env = "TOMO_BASE_URL")]
    base_url: SmolStr,

    /// Print the full token request instead of just the assertion
    #[arg(long)]
    request: bool,

    /// Override the `grant_type` parameter
    #[arg(long)]
    grant_type: Option<String>,

    /// Override the `scope` parameter
    #[arg(long)]
    scope: Option<String>,

    /// Override the `resource` parameter
    #[arg(long)]
    resource: Option<String>,
}

fn main() -> miette::Result<()> {
    let args = Args::parse();

    let options = ClientAssertionOptions::builder()
        .client_id(args.client_id)
        .secret_key(args.secret_key)
        .base_url(args.base_url.clone())
        .build();
    let assertion = create_client_assertion(&options)?;

    if !args.request {
        println!("{assertion}");
        return Ok(());
    }

    let body_options = BodyOptions::builder()
        .maybe_grant_type(args.grant_type)
        .maybe_scope(args.scope)
        .maybe_resource(args.resource)
        .build();
    let request = build_token_request(&assertion, &body_options);

    println!("POST {}", token_endpoint(&args.base_url));
    for (name, value) in &request.headers {
        println!("{name}: {}", value.to_str().into_diagnostic()?);
    }
    println!();
    println!("{}", request.body);

    Ok(())
}
