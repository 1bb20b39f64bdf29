// src/content/sql.rs
// SQL lessons: queries, joins, indexes and MySQL's type coercion rules.

use crate::registry::ContentSource;

pub const SOURCE: ContentSource = ContentSource::new(
    "sql",
    &[
        ("sql-select-basico", SELECT_BASICO),
        ("sql-joins", JOINS),
        ("sql-indices", INDICES),
        ("coercion-tipos", COERCION_TIPOS),
    ],
);

const SELECT_BASICO: &str = r#"<article class="lesson">
  <h1>Consultas SELECT básicas</h1>
  <p>
    Toda consulta de lectura empieza por <code>SELECT</code>. Elegimos las
    columnas, la tabla de origen y, opcionalmente, un filtro con
    <code>WHERE</code> y un orden con <code>ORDER BY</code>.
  </p>
  <pre><code class="language-sql">SELECT id_product, reference, price
FROM ps_product
WHERE active = 1
ORDER BY price DESC
LIMIT 10;</code></pre>
  <h2>Buenas prácticas</h2>
  <ul>
    <li>Evita <code>SELECT *</code> en código de módulos: pide solo lo que usas.</li>
    <li>Usa siempre el prefijo de tablas (<code>_DB_PREFIX_</code>) en PHP.</li>
    <li>Limita los resultados cuando solo necesitas una muestra.</li>
  </ul>
  <p>
    Referencia oficial:
    <a href="https://dev.mysql.com/doc/refman/8.0/en/select.html">MySQL SELECT</a>.
    Siguiente lección: <a href="/curso/sql-joins">uniones entre tablas</a>.
  </p>
</article>"#;

const JOINS: &str = r#"<article class="lesson">
  <h1>Uniones entre tablas (JOIN)</h1>
  <p>
    PrestaShop guarda los textos traducibles en tablas <code>_lang</code>
    separadas. Para mostrar el nombre de un producto hay que unir
    <code>ps_product</code> con <code>ps_product_lang</code>.
  </p>
  <pre><code class="language-sql">SELECT p.id_product, pl.name
FROM ps_product p
INNER JOIN ps_product_lang pl
    ON pl.id_product = p.id_product
   AND pl.id_lang = 1
   AND pl.id_shop = 1;</code></pre>
  <h2>INNER frente a LEFT</h2>
  <p>
    <code>INNER JOIN</code> descarta las filas sin pareja.
    <code>LEFT JOIN</code> las conserva y rellena con <code>NULL</code> las
    columnas de la tabla derecha: útil para encontrar productos sin imagen.
  </p>
  <pre><code class="language-sql">SELECT p.id_product
FROM ps_product p
LEFT JOIN ps_image i ON i.id_product = p.id_product
WHERE i.id_image IS NULL;</code></pre>
  <p>
    Más detalles en
    <a href="https://dev.mysql.com/doc/refman/8.0/en/join.html">la documentación de JOIN</a>.
  </p>
</article>"#;

const INDICES: &str = r#"<article class="lesson">
  <h1>Índices y rendimiento</h1>
  <p>
    Un índice permite a MySQL localizar filas sin recorrer la tabla entera.
    Antes de crear uno, comprueba el plan de ejecución con
    <code>EXPLAIN</code>.
  </p>
  <pre><code class="language-sql">EXPLAIN SELECT id_order
FROM ps_orders
WHERE id_customer = 42;

ALTER TABLE ps_orders ADD INDEX idx_customer (id_customer);</code></pre>
  <h2>Cuándo no indexar</h2>
  <ul>
    <li>Columnas con muy pocos valores distintos, como <code>active</code>.</li>
    <li>Tablas pequeñas que caben enteras en memoria.</li>
    <li>Tablas con muchas más escrituras que lecturas.</li>
  </ul>
  <p>
    Ver <a href="https://dev.mysql.com/doc/refman/8.0/en/optimization-indexes.html">optimización con índices</a>.
  </p>
</article>"#;

const COERCION_TIPOS: &str = r#"<article class="lesson">
  <h1>Coerción de tipos en comparaciones</h1>
  <p>
    Cuando comparas valores de tipos distintos, MySQL convierte uno de ellos
    de forma implícita. El resultado puede sorprender:
  </p>
  <pre><code class="language-sql">SELECT '1abc' = 1;      -- 1 (la cadena se convierte en 1)
SELECT 'abc' = 0;       -- 1 (una cadena no numérica vale 0)
SELECT '10' &lt; '9';     -- 1 (comparación de cadenas, no de números)</code></pre>
  <h2>El mismo problema en PHP</h2>
  <p>
    PHP 8 cambió las reglas de <code>==</code> entre cadenas y números, pero
    los valores que llegan de la base de datos siguen siendo cadenas:
  </p>
  <pre><code class="language-php">$stock = Db::getInstance()-&gt;getValue('SELECT quantity FROM ...');
if ((int) $stock === 0) {
    // sin existencias
}</code></pre>
  <p>
    Convierte explícitamente con <code>(int)</code> o <code>pSQL()</code>
    según el caso. Más en
    <a href="https://dev.mysql.com/doc/refman/8.0/en/type-conversion.html">conversión de tipos</a>
    y <a href="https://www.php.net/manual/es/language.types.type-juggling.php">type juggling</a>.
  </p>
</article>"#;
