#![no_main]

use libfuzzer_sys::arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use sqlbuilder_mysql::descriptor::{fragments, option_keys};
use sqlbuilder_mysql::{encode_descriptor_with, Compatibility, ConnectionOptions};

#[derive(Debug)]
struct OptionsInput {
    host: String,
    database: String,
    username: String,
    password: String,
    connect_attrs: String,
    port: u32,
    connection_timeout: u32,
    minimum_pool_size: u32,
    pooling: bool,
    use_ssl: bool,
    legacy: bool,
}

impl<'a> Arbitrary<'a> for OptionsInput {
    fn arbitrary(u: &mut Unstructured<'a>) -> libfuzzer_sys::arbitrary::Result<Self> {
        Ok(Self {
            host: u.arbitrary()?,
            database: u.arbitrary()?,
            username: u.arbitrary()?,
            password: u.arbitrary()?,
            connect_attrs: u.arbitrary()?,
            port: u.arbitrary()?,
            connection_timeout: u.arbitrary()?,
            minimum_pool_size: u.arbitrary()?,
            pooling: u.arbitrary()?,
            use_ssl: u.arbitrary()?,
            legacy: u.arbitrary()?,
        })
    }
}

fuzz_target!(|input: OptionsInput| {
    let options = ConnectionOptions::builder()
        .host(input.host)
        .database(input.database)
        .username(input.username)
        .password(input.password)
        .connect_attrs(input.connect_attrs)
        .port(input.port)
        .connection_timeout(input.connection_timeout)
        .minimum_pool_size(input.minimum_pool_size)
        .pooling(input.pooling)
        .use_ssl(input.use_ssl)
        .build();

    let compatibility = if input.legacy {
        Compatibility::Legacy
    } else {
        Compatibility::Standard
    };

    let descriptor = encode_descriptor_with(&options, compatibility);
    let emitted = fragments(&options, compatibility);
    assert!(emitted.len() <= option_keys().count());
    assert_eq!(descriptor.is_empty(), emitted.is_empty());
});
