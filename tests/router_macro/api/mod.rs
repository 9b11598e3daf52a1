paramecho::route_table! {
    api {
        greet, get, ":name";
        greet_from, get, ":caller/:name";
    }
}
